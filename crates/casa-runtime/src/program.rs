#![forbid(unsafe_code)]

//! Elm-style model contract for host-driven pages.
//!
//! A [`Model`] receives [`Event`]s (converted into its own message type),
//! updates its state, and talks to the runtime through the [`Stage`]
//! (register reveals, emit effects, request a re-render) and through the
//! [`Cmd`] it returns. [`Model::view`] is pure: it renders the current
//! state as a node tree.

use std::time::Duration;

use casa_render::Node;

use crate::geometry::ElementBox;
use crate::stage::Stage;

/// Input delivered to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Vertical scroll offset changed.
    Scroll { y: f64 },
    /// Viewport size changed.
    Resize { width: f64, height: f64 },
    /// Fresh element measurements from the host.
    Layout(Vec<(String, ElementBox)>),
    /// A user action from a `data-action` element, with its optional value.
    Action { name: String, value: Option<String> },
    /// The host location changed (back/forward, initial load).
    Navigate { path: String },
    /// A reveal with a signal action fired.
    Signal(String),
    /// Periodic tick, when requested with [`Cmd::Tick`].
    Tick,
}

pub trait Model: Sized {
    type Message: From<Event> + 'static;

    /// Called once before the first step.
    fn init(&mut self, _stage: &mut Stage) -> Cmd<Self::Message> {
        Cmd::none()
    }

    fn update(&mut self, msg: Self::Message, stage: &mut Stage) -> Cmd<Self::Message>;

    fn view(&self) -> Node;
}

/// Side effects requested by the model.
#[derive(Default)]
pub enum Cmd<M> {
    #[default]
    None,
    Batch(Vec<Cmd<M>>),
    /// Feed a message straight back into `update`.
    Msg(M),
    /// Deliver [`Event::Tick`] at this interval until [`Cmd::StopTick`].
    Tick(Duration),
    StopTick,
    /// Record a line for the host's log drain.
    Log(String),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Tick(d) => f.debug_tuple("Tick").field(d).finish(),
            Self::StopTick => write!(f, "StopTick"),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
        }
    }
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[inline]
    pub fn log(text: impl Into<String>) -> Self {
        Self::Log(text.into())
    }

    #[inline]
    pub fn tick(interval: Duration) -> Self {
        Self::Tick(interval)
    }

    /// Batch, collapsing empty and single-command cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_collapses() {
        assert!(Cmd::<()>::batch(vec![Cmd::none(), Cmd::none()]).is_none());
        assert!(matches!(
            Cmd::<()>::batch(vec![Cmd::none(), Cmd::log("x")]),
            Cmd::Log(_)
        ));
        assert!(matches!(
            Cmd::<()>::batch(vec![Cmd::log("a"), Cmd::StopTick]),
            Cmd::Batch(v) if v.len() == 2
        ));
    }
}
