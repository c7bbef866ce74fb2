//! # Event Bus Module
//!
//! Delivers editor notifications to the host.
//!
//! ## Overview
//!
//! - The editor publishes one [`EditorEvent`] per host notification
//! - Subscribers filter by [`EventKind`] and run synchronously on publish
//! - Listener objects plug in through [`EventBus::subscribe_listener`]
//!
//! ## Usage
//!
//! ```rust
//! use polyedit_core::event_bus::{EditorEvent, EventBus, EventFilter, EventKind};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Kinds(vec![EventKind::Removed]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(EditorEvent::Removed { index: 0 }).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
