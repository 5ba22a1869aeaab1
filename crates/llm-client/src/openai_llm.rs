//! [`ChatBackend`] for the shared OpenAI client.

use async_trait::async_trait;
use llm_core::Result;
use openai_client::{ChatCompletionRequest, ChatCompletionResponse, OpenAIClient};

use super::ChatBackend;

#[async_trait]
impl ChatBackend for OpenAIClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.chat_completion(&request).await
    }
}
