use crate::{
    append_desktop_log, external_url,
    token_estimate::{self, Pricing},
    BridgeResult, ChunkSplitResult, CostEstimateResult,
};

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_open_external_url(url: String) -> BridgeResult {
    let parsed = match external_url::parse_openable_url(&url) {
        Ok(parsed) => parsed,
        Err(error) => {
            append_desktop_log(&format!("refused to open external url from bridge: {error}"));
            return BridgeResult::failed(error);
        }
    };

    match external_url::open_external_url(&parsed) {
        Ok(()) => BridgeResult::ok(),
        Err(error) => {
            append_desktop_log(&format!("failed to open external url {parsed}: {error}"));
            BridgeResult::failed(error)
        }
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_estimate_cost(
    prompt: String,
    response_tokens: Option<i64>,
    pricing: Option<Pricing>,
) -> CostEstimateResult {
    let pricing = pricing.unwrap_or_default();
    if let Err(error) = pricing.validate() {
        append_desktop_log(&format!("refused cost estimate from bridge: {error}"));
        return CostEstimateResult::failed(error);
    }

    CostEstimateResult::estimated(token_estimate::estimate_cost(
        &prompt,
        response_tokens.unwrap_or(0),
        pricing,
    ))
}

#[tauri::command]
pub(crate) fn desktop_bridge_split_into_chunks(
    text: String,
    max_tokens: i64,
) -> ChunkSplitResult {
    match token_estimate::split_into_chunks(&text, max_tokens) {
        Ok(chunks) => ChunkSplitResult::split(chunks),
        Err(error) => {
            append_desktop_log(&format!("refused chunk split from bridge: {error}"));
            ChunkSplitResult::failed(error)
        }
    }
}
