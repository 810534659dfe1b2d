use std::{fmt::Debug, future::Future};

use serde::Deserialize;

use crate::types::SummaryLength;

/// Generative-text boundary. The length category is a soft
/// instruction embedded in the prompt, not enforced on the response.
pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        transcript: &str,
        length: SummaryLength,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Builds the fixed summarization prompt with the token bounds for
/// the given length category embedded.
pub fn summary_prompt(text: &str, length: SummaryLength) -> String {
    let (min_tokens, max_tokens) = length.token_bounds();
    format!(
        "Summarize the following text into a structured format with two sections: \
         'Main Topic' and 'Key Details'. \
         The 'Main Topic' should capture the primary focus or theme (like the first \
         sentence or declarative statements with 'is', 'are', 'discusses', or 'explains'). \
         The 'Key Details' should include supporting points or examples (like sentences \
         with 'shows', 'includes', 'features', or 'example'), with each key item bolded \
         (e.g., '**Beef:**', '**Sauce:**'). \
         Keep the summary between {min_tokens} and {max_tokens} tokens. \
         Format it with '**Main Topic:**' and '**Key Details:**' as bold headers \
         followed by bullet points (\u{2022}). \
         Here's the text to summarize:\n\n{text}"
    )
}

/// Converts the model's markdown-ish output into the HTML fragment
/// the UI renders: section headers become inline bold tags, newlines
/// become line breaks, each bullet gets a preceding break, and any
/// residual bold markers are stripped.
pub fn format_summary(raw: &str) -> String {
    raw.trim()
        .replace("**Main Topic:**", "<b>Main Topic:</b>")
        .replace('\n', "<br>")
        .replace("**Key Details:**", "<b>Key Details:</b>")
        .replace('\u{2022}', "<br>\u{2022}")
        .replace("**", "")
}
