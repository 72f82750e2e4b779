//! Sample client for the provisioned chat deployment - asks one question
//! against the Azure OpenAI endpoint, grounded with the AI Search index.

use anyhow::{Context, Result};
use serde_json::json;

const API_VERSION: &str = "2024-02-15-preview";

struct ChatConfig {
    openai_endpoint: String,
    openai_key: String,
    deployment: String,
    search_endpoint: String,
    search_index: String,
    search_key: String,
}

impl ChatConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            openai_endpoint: required("AZURE_OPENAI_ENDPOINT")?,
            openai_key: required("AZURE_OPENAI_KEY")?,
            deployment: required("AZURE_OPENAI_DEPLOYMENT")?,
            search_endpoint: required("AZURE_SEARCH_ENDPOINT")?,
            search_index: required("AZURE_SEARCH_INDEX")?,
            search_key: required("AZURE_SEARCH_KEY")?,
        })
    }
}

fn required(key: &str) -> Result<String> {
    std::env::var(key)
        .with_context(|| format!("{key} is not set - provision the openai and search demos first"))
}

pub fn execute(question: Option<String>) -> Result<()> {
    let config = ChatConfig::from_env()?;
    let question =
        question.unwrap_or_else(|| "What do the indexed documents cover?".to_string());

    let url = format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        config.openai_endpoint.trim_end_matches('/'),
        config.deployment,
        API_VERSION
    );
    let body = json!({
        "messages": [{ "role": "user", "content": question }],
        "data_sources": [{
            "type": "azure_search",
            "parameters": {
                "endpoint": config.search_endpoint,
                "index_name": config.search_index,
                "authentication": { "type": "api_key", "key": config.search_key },
            }
        }]
    });

    println!("💬 Asking '{question}'");

    let client = reqwest::blocking::Client::new();
    let response: serde_json::Value = client
        .post(url)
        .header("api-key", &config.openai_key)
        .json(&body)
        .send()
        .context("chat request failed")?
        .error_for_status()
        .context("chat request rejected")?
        .json()
        .context("unexpected chat response")?;

    let message = response
        .pointer("/choices/0/message")
        .context("chat response had no choices")?;

    if let Some(content) = message.get("content").and_then(|c| c.as_str()) {
        println!("\n{content}");
    }
    if let Some(citations) = message
        .pointer("/context/citations")
        .and_then(|c| c.as_array())
    {
        println!("\nSources:");
        for citation in citations {
            if let Some(title) = citation.get("title").and_then(|t| t.as_str()) {
                println!("  - {title}");
            }
        }
    }

    Ok(())
}
