//! Volunteer post creation flow.

#[cfg(test)]
#[path = "add_volunteer_post_submit_test.rs"]
mod add_volunteer_post_submit_test;

use crate::net::api::{VolunteerApi, is_created};
use crate::net::types::{SessionUser, VolunteerPost};
use crate::state::post_form::PostForm;
use crate::state::toast::Notifier;

pub const POST_CREATED_MESSAGE: &str = "Volunteer post added successfully";
pub const POST_FAILED_MESSAGE: &str = "Failed to add volunteer post";
pub const SIGNED_OUT_MESSAGE: &str = "Please log in to add a volunteer post";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// Backend answered with something other than 201.
    Rejected(u16),
    /// Request never produced a response.
    Failed,
}

/// Validate the form and build the request body for `user`.
///
/// Returns `None` (and sends nothing) while a submit is in flight, when a
/// field is invalid, or when there is no session to stamp `user_id` from.
pub fn prepare_post<N>(form: &mut PostForm, user: Option<&SessionUser>, notifier: &N) -> Option<VolunteerPost>
where
    N: Notifier + ?Sized,
{
    let Some(user) = user else {
        notifier.error(SIGNED_OUT_MESSAGE);
        return None;
    };
    form.begin_submit().map(|draft| draft.stamp(user))
}

/// Send a prepared post and report the result to the user.
pub async fn submit_post<V, N>(api: &V, notifier: &N, post: &VolunteerPost) -> SubmitOutcome
where
    V: VolunteerApi + ?Sized,
    N: Notifier + ?Sized,
{
    match api.add_volunteer_post(post).await {
        Ok(status) if is_created(status) => {
            log::info!("volunteer post created: {}", post.post_title);
            notifier.success(POST_CREATED_MESSAGE);
            SubmitOutcome::Created
        }
        Ok(status) => {
            log::error!("volunteer post rejected with status {status}");
            notifier.error(POST_FAILED_MESSAGE);
            SubmitOutcome::Rejected(status)
        }
        Err(e) => {
            log::error!("volunteer post request failed: {e}");
            notifier.error(POST_FAILED_MESSAGE);
            SubmitOutcome::Failed
        }
    }
}

/// Release the in-flight slot; a created post also resets the form.
pub fn apply_outcome(form: &mut PostForm, outcome: SubmitOutcome, user: Option<&SessionUser>) {
    if outcome == SubmitOutcome::Created {
        form.reset(user);
    } else {
        form.finish_submit();
    }
}
