use blogfront::{
    application::{
        create_form::{CreateForm, SubmitOutcome},
        error::AppError,
    },
    config::CreateArgs,
    domain::draft::PostDraft,
    presentation::{posts::CreateFormView, views::render_template},
};

use crate::Ctx;
use crate::io::read_content;
use crate::print::print_view;

pub async fn handle(ctx: &Ctx, args: CreateArgs) -> Result<(), AppError> {
    let content = read_content(args.content, args.content_file)?;
    let draft = PostDraft::new(args.title, args.author, content);
    let mut form = CreateForm::with_draft(draft, ctx.settings.notifications.create_ttl);

    let outcome = form.submit(&ctx.api).await;
    print_view(&render_template(&CreateFormView::new(&form))?);

    match outcome {
        SubmitOutcome::Created => Ok(()),
        SubmitOutcome::Failed(failure) => Err(AppError::failed(format!(
            "blog was not published ({})",
            failure.as_str()
        ))),
        SubmitOutcome::Busy => Err(AppError::unexpected("submission already in flight")),
    }
}
