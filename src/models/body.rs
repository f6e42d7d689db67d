use serde_json::{Map, Value};

use crate::{
    models::posts::{NewPost, Post, PostId},
    Error, Result,
};

const CREATE_FIELDS: [&str; 3] = ["title", "author", "content"];
const UPDATE_FIELDS: [&str; 5] = ["title", "author", "content", "publishDate", "id"];

/// A JSON request body whose fields are only checked for presence.
///
/// Anything that is not a JSON object is treated as an object with no keys.
#[derive(Debug, Default)]
pub struct RequestBody(Map<String, Value>);

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }
}

impl RequestBody {
    /// Fails on the first of `fields` that is absent, in the order given.
    pub fn require(&self, fields: &[&str]) -> Result<()> {
        match fields.iter().copied().find(|field| !self.0.contains_key(*field)) {
            Some(field) => Err(Error::BadRequest(format!("Missing {field} in request body"))),
            None => Ok(()),
        }
    }

    pub fn into_new_post(mut self) -> Result<NewPost> {
        self.require(&CREATE_FIELDS)?;

        let publish_date = self.0.remove("publishDate").map(into_text);
        Ok(NewPost {
            title: self.take("title"),
            content: self.take("content"),
            author: self.take("author"),
            publish_date,
        })
    }

    /// Builds the replacement record for `PUT /{path_id}`.
    pub fn into_post(mut self, path_id: &str) -> Result<Post> {
        self.require(&UPDATE_FIELDS)?;

        let body_id = self.take("id");
        if body_id != path_id {
            return Err(Error::BadRequest(format!(
                "Request path id {path_id} and request body id {body_id} must match"
            )));
        }

        let not_found = || Error::NotFound(format!("Post {path_id} not found"));
        if path_id.is_empty() || !path_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found());
        }
        let id = path_id.parse::<PostId>().map_err(|_| not_found())?;

        Ok(Post {
            id,
            title: self.take("title"),
            content: self.take("content"),
            author: self.take("author"),
            publish_date: self.take("publishDate"),
        })
    }

    fn take(&mut self, field: &str) -> String {
        self.0.remove(field).map(into_text).unwrap_or_default()
    }
}

// Strings are kept verbatim, anything else as its JSON text.
fn into_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
