//! Prompt construction for the generative model.

use crate::domain::challenge::ResponseFormat;

/// Build the challenge-generation prompt.
///
/// Names the library and difficulty upper-cased, appends the custom
/// instruction verbatim when present, and states the exact output contract
/// for the chosen format. Compliance is not validated here; the response
/// parser carries that burden.
pub fn build(
    library: &str,
    difficulty: &str,
    custom_additions: Option<&str>,
    format: ResponseFormat,
) -> String {
    let mut prompt = format!(
        "Generate a programming challenge for the '{}' library at {} difficulty. \
         Write a concise challenge title and a description that tells the reader \
         exactly what to build, including acceptance criteria.",
        library.to_uppercase(),
        difficulty.to_uppercase(),
    );

    if let Some(custom) = custom_additions {
        prompt.push(' ');
        prompt.push_str(custom);
    }

    prompt.push(' ');
    prompt.push_str(format_contract(format));
    prompt
}

fn format_contract(format: ResponseFormat) -> &'static str {
    match format {
        ResponseFormat::Json => {
            "Answer with a single-line JSON object with exactly two string keys, \
             \"title\" and \"body\". Do not wrap the answer in code fences or add \
             any text outside the JSON object."
        }
        ResponseFormat::Delimited => {
            "Answer on a single line as TITLE ||| BODY, with any newlines inside \
             the body escaped as \\n. Do not wrap the answer in code fences or add \
             any other text."
        }
    }
}
