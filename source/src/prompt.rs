//! Generation prompts.
//!
//! Both prompts ask for the same specification JSON; they differ only in what
//! the service is told to start from: a free-text requirement or a use-case
//! name with optional context.

use serde::{Deserialize, Serialize};

/// Free-text request as accepted from a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "userRequirement", default)]
    pub requirement: String,
}

/// Use-case request as accepted from a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseRequest {
    #[serde(default)]
    pub use_case_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

const SPECIFICATION_SHAPE: &[&str] = &[
    "  \"fields\": [",
    "    {",
    "      \"name\": \"[field name]\",",
    "      \"type\": \"int\",",
    "      \"min\": [minimum value],",
    "      \"max\": [maximum value]",
    "    }",
    "  ],",
    "  \"returnConditions\": [\"[condition 1]\", \"[condition 2]\", \"[condition 3]\"],",
    "  \"logMessages\": [\"[success message]\", \"[error message]\", \"[validation message]\"]",
    "}",
];

const JSON_ONLY: &str = "Return ONLY the JSON object, no additional text or explanations.";

fn push_numbered(prompt: &mut String, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, line));
    }
    prompt.push('\n');
}

fn push_shape(prompt: &mut String) {
    for line in SPECIFICATION_SHAPE {
        prompt.push_str(line);
        prompt.push('\n');
    }
    prompt.push('\n');
}

/// Build the prompt asking the generative service for a specification JSON.
pub fn build_prompt(requirement: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are a software testing expert. Based on the user requirement: \"{}\"\n\n",
        requirement
    ));
    prompt.push_str(
        "Generate a comprehensive test case specification in JSON format with the following structure:\n\n",
    );
    prompt.push_str("{\n");
    prompt.push_str("  \"functionCode\": \"[Generate a meaningful function code]\",\n");
    prompt.push_str("  \"functionName\": \"[Generate a descriptive function name]\",\n");
    prompt.push_str("  \"createdBy\": \"[Generate a developer name]\",\n");
    prompt.push_str(&format!("  \"testRequirement\": \"{}\",\n", requirement));
    push_shape(&mut prompt);

    prompt.push_str("Requirements:\n");
    push_numbered(
        &mut prompt,
        &[
            "Identify the key input fields that need testing",
            "For each field, choose min/max values that fit the context, with min <= max",
            "Use realistic and meaningful field names",
            "Create a descriptive function name and code",
            "Consider boundary value analysis principles",
            "Generate return conditions specific to the requirement",
            "Generate log messages for success and error scenarios",
        ],
    );

    prompt.push_str("Examples:\n");
    prompt.push_str("- For age validation (10-18): return conditions like \"Valid age\", \"Age too young\", \"Age too old\"\n");
    prompt.push_str("- For salary, use min: 1000, max: 100000\n");
    prompt.push_str("- For percentage, use min: 0, max: 100\n\n");
    prompt.push_str(JSON_ONLY);

    prompt
}

/// Build the prompt asking for a specification JSON that covers the use case
/// `name`. Blank `context` is left out.
pub fn build_use_case_prompt(name: &str, context: Option<&str>) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are a software testing expert. Based on the use case: \"{}\"",
        name
    ));
    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("\n\nAdditional Context: {}", context));
    }
    prompt.push_str("\n\n");
    prompt.push_str(
        "Generate a comprehensive test case specification in JSON format for a complete test case table with the following structure:\n\n",
    );
    prompt.push_str("{\n");
    prompt.push_str("  \"functionCode\": \"[Generate a meaningful function code based on use case]\",\n");
    prompt.push_str("  \"functionName\": \"[Generate a descriptive function name based on use case]\",\n");
    prompt.push_str("  \"createdBy\": \"[Generate a developer name]\",\n");
    prompt.push_str("  \"testRequirement\": \"[Detailed description of what this use case tests]\",\n");
    push_shape(&mut prompt);

    prompt.push_str("Requirements:\n");
    push_numbered(
        &mut prompt,
        &[
            "Analyze the use case name and generate appropriate input fields with realistic min/max values",
            "Create comprehensive test scenarios that cover boundary value analysis",
            "Generate meaningful return conditions that match the use case context",
            "Create relevant log messages for different scenarios",
            "Ensure the test cases cover normal, boundary, and abnormal cases",
            "Make the function name and code descriptive and related to the use case",
            "Generate realistic field names and data types based on the use case context",
        ],
    );

    prompt.push_str("Examples of good use case analysis:\n");
    prompt.push_str("- \"User Login\": fields like username, password, loginAttempts; return conditions like \"Login successful\", \"Invalid credentials\", \"Account locked\"\n");
    prompt.push_str("- \"Age Validation\": field like age with min/max; return conditions like \"Valid age\", \"Age too young\", \"Age too old\"\n");
    prompt.push_str("- \"Payment Processing\": fields like amount, cardNumber, expiryDate; return conditions like \"Payment successful\", \"Invalid card\", \"Insufficient funds\"\n\n");
    prompt.push_str(JSON_ONLY);

    prompt
}
