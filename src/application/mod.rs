//! Interaction components: the list, the create form and the post card.

pub mod create_form;
pub mod error;
pub mod list_view;
pub mod notifications;
pub mod post_card;

#[cfg(test)]
pub(crate) mod testing;
