//! Terminal render surface for the post list
//!
//! [`PostListView`] turns a list of posts into a column of titles, one line
//! per post, cut to a [`Viewport`]. [`PostListView::follow`] keeps drawing
//! frames as a [`PostListModel`](crate::view_model::PostListModel) publishes
//! new state.

use crate::core::PostviewResult;
use crate::posts::Post;
use std::borrow::Cow;
use std::io::Write;
use tokio::sync::watch;

/// Scroll window over the column of titles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Rows skipped from the top
    pub offset: usize,
    /// Maximum rows shown, unbounded when `None`
    pub limit: Option<usize>,
}

impl Viewport {
    pub fn new(offset: usize, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }
}

/// Renders post titles as a scrollable column
#[derive(Debug, Clone, Default)]
pub struct PostListView {
    viewport: Viewport,
}

impl PostListView {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Displayed rows for `posts`: one title per post, in list order
    pub fn rows<'a>(&self, posts: &'a [Post]) -> Vec<Cow<'a, str>> {
        posts
            .iter()
            .skip(self.viewport.offset)
            .take(self.viewport.limit.unwrap_or(usize::MAX))
            .map(|post| single_line(&post.title))
            .collect()
    }

    /// Write one frame for `posts`
    pub fn render<W: Write>(&self, posts: &[Post], out: &mut W) -> PostviewResult<()> {
        for row in self.rows(posts) {
            writeln!(out, "{}", row)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Render the current state, then re-render on every change until the
    /// publishing model goes away. Returns the number of frames drawn.
    pub async fn follow<W: Write>(
        &self,
        mut posts: watch::Receiver<Vec<Post>>,
        out: &mut W,
    ) -> PostviewResult<usize> {
        let mut frames = 0;
        loop {
            {
                let current = posts.borrow_and_update();
                self.render(&current, out)?;
            }
            frames += 1;

            if posts.changed().await.is_err() {
                break;
            }
        }
        tracing::debug!(frames, "render loop finished");
        Ok(frames)
    }
}

fn single_line(title: &str) -> Cow<'_, str> {
    if title.contains(['\n', '\r']) {
        Cow::Owned(title.replace("\r\n", " ").replace(['\n', '\r'], " "))
    } else {
        Cow::Borrowed(title)
    }
}
