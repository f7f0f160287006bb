use blogfront::{
    application::{error::AppError, post_card::PostCard},
    config::ShowArgs,
    domain::error::DomainError,
    presentation::{posts::PostDetailView, views::render_template},
};
use blogfront_api_types::PostId;

use crate::Ctx;
use crate::print::{print_json, print_line, print_view};

use super::list::load_list;

/// There is no single-post endpoint; the post is looked up in the full listing.
pub async fn handle(ctx: &Ctx, args: ShowArgs) -> Result<(), AppError> {
    let list = load_list(&ctx.api, &ctx.settings).await;
    if let Some(message) = list.error() {
        print_line(message);
        return Err(AppError::failed(message));
    }

    let id = PostId::new(args.id.trim());
    let Some(post) = list.find(&id).cloned() else {
        print_line(&format!("Blog {id} not found"));
        return Err(DomainError::not_found("blog", id.as_str()).into());
    };

    if args.json {
        return print_json(&post);
    }

    let mut card = PostCard::new(post, ctx.settings.notifications.delete_ttl);
    card.expand();
    print_view(&render_template(&PostDetailView::from_card(&card))?);
    Ok(())
}
