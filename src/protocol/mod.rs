// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod dispatcher;
pub mod messages;
pub mod notifier;
pub mod parser;

pub use dispatcher::{Dispatch, InboundDispatcher};
pub use messages::{Command, DecodeError, Event};
pub use notifier::EventNotifier;
pub use parser::{Frame, ParseError, Parser};
