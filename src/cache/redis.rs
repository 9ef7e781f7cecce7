use redis::{AsyncCommands, ExistenceCheck, SetExpiry, SetOptions};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppResult;

pub async fn get_json<T: DeserializeOwned>(
    client: &redis::Client,
    key: &str,
) -> AppResult<Option<T>> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let value: Option<String> = conn.get(key).await?;
    Ok(value.and_then(|v| serde_json::from_str(&v).ok()))
}

pub async fn set_json<T: Serialize>(
    client: &redis::Client,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let json = serde_json::to_string(value)
        .map_err(|e| crate::error::AppError::internal(format!("serialize {}: {}", key, e)))?;
    let _: () = conn.set(key, json).await?;
    Ok(())
}

pub async fn set_string_ex(
    client: &redis::Client,
    key: &str,
    value: &str,
    ttl: u64,
) -> AppResult<()> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let _: () = conn.set_ex(key, value, ttl).await?;
    Ok(())
}

pub async fn get_string(client: &redis::Client, key: &str) -> AppResult<Option<String>> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let value: Option<String> = conn.get(key).await?;
    Ok(value)
}

pub async fn delete(client: &redis::Client, key: &str) -> AppResult<()> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let _: () = conn.del(key).await?;
    Ok(())
}

/// Single `SET NX EX`; true when this call claimed the key. One round trip,
/// so the key can never be left claimed without its TTL.
pub async fn claim_once(
    client: &redis::Client,
    key: &str,
    ttl: u64,
) -> AppResult<bool> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let options = SetOptions::default()
        .conditional_set(ExistenceCheck::NX)
        .with_expiration(SetExpiry::EX(ttl as usize));
    let reply: Option<String> = conn.set_options(key, "1", options).await?;
    Ok(reply.is_some())
}

pub async fn push_list(client: &redis::Client, key: &str, value: &str) -> AppResult<()> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let _: () = conn.rpush(key, value).await?;
    Ok(())
}
