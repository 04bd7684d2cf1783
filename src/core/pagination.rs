//! Cursor pagination shared by every list endpoint.
//!
//! The service returns an opaque `next_page` token with each page; the next
//! call for the same query passes it back untouched. An absent or empty token
//! marks the last page.

use crate::core::request::Endpoint;

/// A response that carries a pagination cursor.
pub trait Page {
    /// The cursor for the following page, as returned by the service.
    fn next_page(&self) -> Option<&str>;
}

/// An endpoint that accepts a `next_page` cursor.
pub trait Paginated: Endpoint<Output: Page> + Clone {
    /// Sets (or clears) the cursor sent with the request.
    fn set_next_page(&mut self, cursor: Option<String>);
}

/// Builds the request for the page following `page`, if there is one.
pub(crate) fn follow<E: Paginated>(current: &E, page: &E::Output) -> Option<E> {
    let cursor = page.next_page().filter(|c| !c.is_empty())?;
    let mut next = current.clone();
    next.set_next_page(Some(cursor.to_string()));
    Some(next)
}

macro_rules! impl_page {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::core::pagination::Page for $ty {
                fn next_page(&self) -> Option<&str> {
                    self.next_page.as_deref()
                }
            }
        )+
    };
}
pub(crate) use impl_page;

macro_rules! impl_paginated {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::core::pagination::Paginated for $ty {
                fn set_next_page(&mut self, cursor: Option<String>) {
                    self.next_page = cursor;
                }
            }
        )+
    };
}
pub(crate) use impl_paginated;
