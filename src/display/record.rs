//! Result and record formatting

use crate::activity::ResultRecord;
use crate::error::{RestdeskError, RestdeskResult};
use crate::models::{Post, User};

use super::format::separator;
use super::OutputFormat;

/// Format a result record for printing
pub fn format_result(record: &ResultRecord, format: OutputFormat) -> RestdeskResult<String> {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!("{} {}\n", record.method, record.endpoint));
            output.push_str(&format!("{}\n", record.message));
            output.push_str(&separator(40));
            output.push('\n');
            output.push_str(&record.pretty_data());
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(record)?)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(record).map_err(|e| RestdeskError::Export(e.to_string()))
        }
    }
}

/// Format a single post's details
pub fn format_post_details(post: &Post) -> String {
    let mut output = String::new();

    output.push_str(&format!("Post {}\n", post.id.get()));
    output.push_str(&format!("  Title:   {}\n", post.title));
    output.push_str(&format!("  User ID: {}\n", post.user_id.get()));
    if post.attachment.is_some() {
        output.push_str("  Attachment: yes\n");
    }
    output.push('\n');
    for line in post.body.lines() {
        output.push_str(&format!("  {}\n", line));
    }

    output
}

/// Format a created user's details
pub fn format_user_details(user: &User) -> String {
    let mut output = String::new();

    output.push_str(&format!("User {}\n", user.id.get()));
    output.push_str(&format!("  Name:     {}\n", user.name));
    output.push_str(&format!("  Username: {}\n", user.username));
    output.push_str(&format!("  Email:    {}\n", user.email));
    if !user.website.is_empty() {
        output.push_str(&format!("  Website:  {}\n", user.website));
    }

    output
}
