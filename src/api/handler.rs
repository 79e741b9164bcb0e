//! Handler capability interface
//!
//! An [`ApiOperation`] declares its typed arguments and output; the blanket
//! [`ApiHandler`] impl decodes raw JSON arguments into them at the boundary
//! so the navigator only ever sees validated values.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ListNavError, Result};
use crate::types::ConversationId;

use super::name::ApiName;

/// A typed operation behind one API name
#[async_trait]
pub trait ApiOperation: Send + Sync {
    /// Decoded arguments
    type Args: DeserializeOwned + JsonSchema + Send;
    /// Response body
    type Output: Serialize + Send;

    /// API this operation serves
    const API: ApiName;

    /// One-line description for the host's API catalog
    fn description() -> &'static str;

    /// Run the operation
    async fn call(&self, conversation: &ConversationId, args: Self::Args) -> Result<Self::Output>;
}

/// Object-safe handler stored in the router
#[async_trait]
pub trait ApiHandler: Send + Sync {
    /// API handled
    fn name(&self) -> ApiName;

    /// Description for the host's API catalog
    fn description(&self) -> &'static str;

    /// JSON schema of the accepted arguments
    fn input_schema(&self) -> Value;

    /// Decode `arguments`, run the operation and encode its output
    async fn handle(&self, conversation: &ConversationId, arguments: Value) -> Result<Value>;
}

#[async_trait]
impl<O> ApiHandler for O
where
    O: ApiOperation,
{
    fn name(&self) -> ApiName {
        O::API
    }

    fn description(&self) -> &'static str {
        O::description()
    }

    fn input_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(O::Args)).unwrap_or(Value::Null)
    }

    async fn handle(&self, conversation: &ConversationId, arguments: Value) -> Result<Value> {
        // Hosts send `null` for calls without arguments.
        let arguments = if arguments.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            arguments
        };

        let args: O::Args = serde_json::from_value(arguments)
            .map_err(|e| ListNavError::invalid_arguments(O::API.to_string(), e.to_string()))?;

        let output = self.call(conversation, args).await?;
        Ok(serde_json::to_value(output)?)
    }
}
