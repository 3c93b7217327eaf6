/// Generic pagination consumer
///
/// List endpoints return one page of items plus a `links` block pointing at
/// the next page. `fetch_all` walks those links and materializes the whole
/// collection, preserving server order across pages.
use std::future::Future;

use serde::Serialize;

use crate::api::models::{Links, Meta};
use crate::error::{Error, Result};

/// Upper bound on pages followed before the walk is treated as
/// non-terminating. A cyclic "next" chain fails fast instead of looping
/// forever.
pub const MAX_PAGES: usize = 200;

/// Page-selection query parameters for list endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListOptions {
    pub page: u64,
    pub per_page: u64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 200,
        }
    }
}

/// One page of a list response.
pub struct Page<T> {
    pub items: Vec<T>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

/// Fetch every page of a list operation into one collection.
///
/// `fetch` is called once per page, sequentially, starting at page 1. Items
/// are appended in the order the server returned them. Any page failure
/// aborts the whole walk; partially fetched pages are discarded. A "next"
/// link that cannot be parsed into a page number aborts the walk too, as
/// [`Error::MalformedPageLink`]. If more than `max_pages` pages are fetched
/// and the server still reports a next link, the walk fails with
/// [`Error::PaginationExhausted`].
pub async fn fetch_all<T, F, Fut>(mut fetch: F, max_pages: usize) -> Result<Vec<T>>
where
    F: FnMut(ListOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut opts = ListOptions::default();
    let mut fetched = 0usize;

    loop {
        let page = fetch(opts).await?;
        items.extend(page.items);
        fetched += 1;

        let next = match &page.links {
            Some(links) => links.next_page()?,
            None => None,
        };
        match next {
            None => return Ok(items),
            Some(n) => {
                if fetched >= max_pages {
                    return Err(Error::PaginationExhausted(max_pages));
                }
                opts.page = n;
            }
        }
    }
}

/// Fetch every page with the default safety cap.
pub async fn fetch_all_pages<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(ListOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    fetch_all(fetch, MAX_PAGES).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Pages;
    use std::cell::Cell;

    fn links_with_next(page: u64) -> Option<Links> {
        Some(Links {
            pages: Some(Pages {
                next: Some(format!("https://api.stratocloud.dev/v2/widgets?page={}", page)),
                ..Default::default()
            }),
        })
    }

    #[tokio::test]
    async fn test_single_page_collection() {
        let items = fetch_all_pages(|_opts| async {
            Ok(Page {
                items: vec!["a", "b"],
                links: None,
                meta: None,
            })
        })
        .await
        .unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_multi_page_order_preserved() {
        // Three pages of varying sizes; output must be the concatenation in
        // server order.
        let pages = vec![
            (vec![1, 2, 3], links_with_next(2)),
            (vec![4], links_with_next(3)),
            (vec![5, 6], None),
        ];
        let calls = Cell::new(0usize);

        let items = fetch_all_pages(|opts| {
            let idx = calls.get();
            calls.set(idx + 1);
            let (items, links) = pages[idx].clone();
            assert_eq!(opts.page as usize, idx + 1);
            async move {
                Ok(Page {
                    items,
                    links,
                    meta: None,
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_unterminating_next_link_fails_at_cap() {
        let calls = Cell::new(0usize);
        let result: Result<Vec<i32>> = fetch_all(
            |opts| {
                calls.set(calls.get() + 1);
                let next = links_with_next(opts.page + 1);
                async move {
                    Ok(Page {
                        items: vec![0],
                        links: next,
                        meta: None,
                    })
                }
            },
            5,
        )
        .await;

        assert!(matches!(result, Err(Error::PaginationExhausted(5))));
        assert_eq!(calls.get(), 5);
    }

    #[tokio::test]
    async fn test_unparsable_next_link_aborts_the_walk() {
        // A next link missing its page parameter must fail the walk, not
        // read as terminal and hand back the first page as the whole
        // collection.
        let calls = Cell::new(0usize);
        let result: Result<Vec<i32>> = fetch_all_pages(|_opts| {
            calls.set(calls.get() + 1);
            async {
                Ok(Page {
                    items: vec![1, 2],
                    links: Some(Links {
                        pages: Some(Pages {
                            next: Some(
                                "https://api.stratocloud.dev/v2/widgets?per_page=200".to_string(),
                            ),
                            ..Default::default()
                        }),
                    }),
                    meta: None,
                })
            }
        })
        .await;

        assert!(matches!(result, Err(Error::MalformedPageLink(_))));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_page_failure_discards_partials() {
        let calls = Cell::new(0usize);
        let result: Result<Vec<i32>> = fetch_all_pages(|_opts| {
            let idx = calls.get();
            calls.set(idx + 1);
            async move {
                if idx == 0 {
                    Ok(Page {
                        items: vec![1, 2],
                        links: links_with_next(2),
                        meta: None,
                    })
                } else {
                    Err(Error::Api {
                        status: 500,
                        message: "boom".into(),
                    })
                }
            }
        })
        .await;

        assert!(matches!(result, Err(Error::Api { status: 500, .. })));
    }
}
