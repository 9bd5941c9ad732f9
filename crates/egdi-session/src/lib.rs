#![cfg_attr(doc, doc = include_str!("../README.md"))]
#![doc(html_logo_url = "https://cdnweb.devolutions.net/images/projects/devolutions/logos/devolutions-icon-shadow.svg")]
#![allow(clippy::arithmetic_side_effects)] // FIXME: remove
#![allow(clippy::cast_possible_truncation)] // FIXME: remove

#[macro_use]
extern crate tracing;

pub mod cache;
pub mod chunk;
pub mod primary;
pub mod surface;

mod error;
mod observer;
mod processor;

pub use error::{ObserverError, SessionError};
pub use observer::{GdiObserver, ObserverResult};
pub use processor::OrdersProcessor;

pub type SessionResult<T> = Result<T, SessionError>;
