use blogfront::{
    application::{error::AppError, list_view::ListView, post_card::PostCard},
    infra::api::BlogApi,
    presentation::{
        posts::PostListView,
        views::{NoticeView, render_template},
    },
};
use blogfront::config::{ListArgs, Settings};

use crate::Ctx;
use crate::print::{print_json, print_view};

pub async fn handle(ctx: &Ctx, args: ListArgs) -> Result<(), AppError> {
    let list = load_list(&ctx.api, &ctx.settings).await;

    if let Some(message) = list.error() {
        print_view(&render_list(&list, &[], None)?);
        return Err(AppError::failed(message));
    }

    if args.json {
        return print_json(list.posts());
    }

    let cards = cards(&list, &ctx.settings);
    print_view(&render_list(&list, &cards, None)?);
    Ok(())
}

pub(crate) async fn load_list<A>(api: &A, settings: &Settings) -> ListView
where
    A: BlogApi + ?Sized,
{
    let mut list = ListView::new(settings.notifications.delete_ttl);
    list.load(api).await;
    list
}

pub(crate) fn cards(list: &ListView, settings: &Settings) -> Vec<PostCard> {
    list.posts()
        .iter()
        .cloned()
        .map(|post| {
            PostCard::with_preview_chars(
                post,
                settings.display.preview_chars.get(),
                settings.notifications.delete_ttl,
            )
        })
        .collect()
}

pub(crate) fn render_list(
    list: &ListView,
    cards: &[PostCard],
    notice: Option<NoticeView>,
) -> Result<String, AppError> {
    Ok(render_template(&PostListView::new(list, cards, notice))?)
}
