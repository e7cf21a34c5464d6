use postview::config::Config;
use postview::core::PostviewResult;
use postview::di::ServiceContainer;
use postview::posts::{SourceKind, StaticPostSource};
use postview::render::{PostListView, Viewport};
use postview::view_model::PostListModel;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

pub struct ListOptions {
    pub source: SourceKind,
    pub url: Option<String>,
    pub fixture: Option<PathBuf>,
    pub offset: usize,
    pub limit: Option<usize>,
}

pub async fn run(options: ListOptions) -> PostviewResult<()> {
    let container = build_container(&options)?;

    let model = PostListModel::new(container.post_source());
    let posts = model.subscribe();
    let view = PostListView::new(Viewport::new(options.offset, options.limit));

    let mut stdout = io::stdout();
    // Dropping the model after the load closes the channel and ends the render loop
    let load = async move {
        model.settled().await;
    };
    let (rendered, ()) = tokio::join!(view.follow(posts, &mut stdout), load);
    rendered?;

    Ok(())
}

fn build_container(options: &ListOptions) -> PostviewResult<ServiceContainer> {
    let mut config = Config::load()?;
    if let Some(ref url) = options.url {
        config.set_posts_url(url)?;
    }

    let kind = if options.fixture.is_some() {
        SourceKind::Static
    } else {
        options.source
    };
    let container = ServiceContainer::from_config(config, kind)?;

    match options.fixture {
        Some(ref fixture) => {
            let source = StaticPostSource::from_json_file(fixture)?;
            Ok(container.with_post_source(Arc::new(source)))
        }
        None => Ok(container),
    }
}
