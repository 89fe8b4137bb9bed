//! "Recommend this post by e-mail" workflow.

use std::sync::Arc;

use url::Url;

use crate::application::forms::{FieldErrors, ShareFields, ShareForm};
use crate::application::services::post_service::find_published_post;
use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::infrastructure::mail::{Mailer, OutgoingMail};
use crate::utils::absolute_url::absolute_url;
use serde_json::json;

/// Context of the share page.
#[derive(Debug, Clone)]
pub struct ShareContext {
    pub post: Post,
    pub form: ShareForm,
    pub errors: FieldErrors,
    pub sent: bool,
}

/// Validates share forms and sends recommendation mails.
pub struct ShareService {
    posts: Arc<dyn PostRepository>,
    mailer: Arc<dyn Mailer>,
    from_address: String,
}

impl ShareService {
    /// Creates the service. `from_address` is the sender of every recommendation.
    pub fn new(
        posts: Arc<dyn PostRepository>,
        mailer: Arc<dyn Mailer>,
        from_address: impl Into<String>,
    ) -> Self {
        Self {
            posts,
            mailer,
            from_address: from_address.into(),
        }
    }

    /// Empty form for the initial page load.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `post_id` is not a published post.
    pub async fn prepare(&self, post_id: i64) -> Result<ShareContext, AppError> {
        let post = find_published_post(self.posts.as_ref(), post_id).await?;

        Ok(ShareContext {
            post,
            form: ShareForm::default(),
            errors: FieldErrors::default(),
            sent: false,
        })
    }

    /// Validates a submitted form and, if valid, sends one recommendation mail.
    ///
    /// `base_url` is the public root of the site; the mail links to the post's
    /// absolute URL below it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `post_id` is not a published post.
    /// Returns [`AppError::SendFailed`] if the mail transport fails.
    pub async fn submit(
        &self,
        post_id: i64,
        form: ShareForm,
        base_url: &Url,
    ) -> Result<ShareContext, AppError> {
        let post = find_published_post(self.posts.as_ref(), post_id).await?;

        let fields = match form.clean() {
            Ok(fields) => fields,
            Err(errors) => {
                return Ok(ShareContext {
                    post,
                    form,
                    errors,
                    sent: false,
                });
            }
        };

        let post_url = absolute_url(base_url, &post.absolute_path());
        let mail = self.compose(&post, &fields, &post_url);

        if let Err(e) = self.mailer.send(mail).await {
            tracing::error!(error = %e, post_id, backend = self.mailer.backend_name(), "Failed to send recommendation");
            metrics::counter!("blog_share_mail_failures_total").increment(1);
            return Err(AppError::send_failed(
                "Could not send the recommendation e-mail",
                json!({ "post_id": post_id }),
            ));
        }

        tracing::info!(post_id, "Recommendation sent");
        metrics::counter!("blog_share_mails_sent_total").increment(1);

        Ok(ShareContext {
            post,
            form,
            errors: FieldErrors::default(),
            sent: true,
        })
    }

    /// Name of the configured mail backend.
    pub fn mailer_backend(&self) -> &'static str {
        self.mailer.backend_name()
    }

    fn compose(&self, post: &Post, fields: &ShareFields, post_url: &str) -> OutgoingMail {
        OutgoingMail {
            from: self.from_address.clone(),
            to: vec![fields.to.clone()],
            reply_to: Some(fields.email.clone()),
            subject: format!("{} recommends you read {}", fields.name, post.title),
            body: format!(
                "Read {} at {}\n\n{}'s comments: {}",
                post.title, post_url, fields.name, fields.comments
            ),
        }
    }
}
