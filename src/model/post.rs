use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub details: String,

    #[serde(rename = "userId")]
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub details: String,
    pub user_id: i32,
}

impl NewPost {
    pub fn new(details: impl Into<String>, user_id: i32) -> Self {
        Self {
            details: details.into(),
            user_id,
        }
    }

    pub(crate) fn into_post(self, id: i32) -> Post {
        Post {
            id,
            details: self.details,
            user_id: self.user_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub details: Option<String>,
}

impl PostUpdate {
    pub fn apply(self, post: &mut Post) {
        if let Some(details) = self.details {
            post.details = details;
        }
    }
}
