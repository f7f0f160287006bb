use blogfront::{
    application::{error::AppError, post_card::DeleteOutcome},
    config::DeleteArgs,
    domain::error::DomainError,
    presentation::{posts::delete_prompt, views::NoticeView},
};
use blogfront_api_types::PostId;

use crate::Ctx;
use crate::io::Confirm;
use crate::print::{print_line, print_view};

use super::list::{cards, load_list, render_list};

pub const CANCELLED_MESSAGE: &str = "Delete cancelled.";

/// Load the list, confirm, delete, and print the list as it stands afterwards.
pub async fn handle<C>(ctx: &Ctx, args: DeleteArgs, confirm: &mut C) -> Result<(), AppError>
where
    C: Confirm + ?Sized,
{
    let mut list = load_list(&ctx.api, &ctx.settings).await;
    if let Some(message) = list.error() {
        print_line(message);
        return Err(AppError::failed(message));
    }

    let id = PostId::new(args.id.trim());
    let mut cards = cards(&list, &ctx.settings);
    let Some(index) = cards.iter().position(|card| card.id() == &id) else {
        print_line(&format!("Blog {id} not found"));
        return Err(DomainError::not_found("blog", id.as_str()).into());
    };

    let card = &mut cards[index];
    card.request_delete();
    if !args.yes && !confirm.confirm(&delete_prompt(card))? {
        card.cancel_delete();
        print_line(CANCELLED_MESSAGE);
        return Ok(());
    }

    let outcome = card
        .confirm_delete(&ctx.api, |deleted| {
            list.remove(deleted);
        })
        .await;

    match outcome {
        DeleteOutcome::Deleted => {
            cards.remove(index);
            print_view(&render_list(&list, &cards, None)?);
            Ok(())
        }
        DeleteOutcome::Failed => {
            let notice = cards[index].notice();
            let message = notice
                .as_ref()
                .map_or_else(|| "Failed to delete blog".to_string(), |n| n.message.clone());
            print_view(&render_list(&list, &cards, notice.map(NoticeView::from))?);
            Err(AppError::failed(message))
        }
        DeleteOutcome::NotConfirming => Err(AppError::unexpected("delete prompt was not open")),
    }
}
