//! Resizable side panel for [`iced`] layouts.
//!
//! The crate is split into two layers:
//! - a UI-agnostic core ([`ResizeController`], [`BreakpointGate`],
//!   [`WidthNotifier`]) that owns width clamping, boundary cursor hints,
//!   breakpoint collapse and cross-panel width publication;
//! - an `iced` layer ([`SidePanel`], [`PanelView`]) that routes pointer
//!   intents through a reducer and renders the panel box with its
//!   affordance strip.
//!
//! Every panel in a layout root shares one [`WidthNotifier`]. A scaffold
//! subscribes to it and receives the full `PanelId -> width` mapping on
//! each broadcast, which is enough to size the remaining content area.
//!
//! See `examples/scaffold.rs` for a runnable two-panel layout.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::text;
//! use iced::{Element, Size, Task};
//! use otty_ui_side_panel::{
//!     PanelConfig, PanelEvent, PanelId, PanelIntent, SidePanel, WidthNotifier,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Panel(PanelEvent),
//! }
//!
//! fn mount(notifier: &WidthNotifier) -> SidePanel {
//!     let config = PanelConfig::builder(180.0, 420.0)
//!         .start_width(240.0)
//!         .scaffold_breakpoint(600.0)
//!         .build()
//!         .expect("valid panel config");
//!     SidePanel::new(PanelId::new(), config, notifier.clone())
//! }
//!
//! fn update(panel: &mut SidePanel, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Panel(PanelEvent::Intent(intent)) => {
//!             panel.reduce(intent).map(Message::Panel)
//!         },
//!         Message::Panel(PanelEvent::Effect(_)) => Task::none(),
//!     }
//! }
//!
//! fn view(panel: &SidePanel) -> Element<'_, Message> {
//!     panel.view(text("Explorer"), |intent| {
//!         Message::Panel(PanelEvent::Intent(intent))
//!     })
//! }
//!
//! # let notifier = WidthNotifier::new();
//! # let mut panel = mount(&notifier);
//! # let _ = panel.layout(Size::new(1024.0, 768.0));
//! # let _ = update(&mut panel, Message::Panel(PanelIntent::DragEnded.into()));
//! # let _ = view(&panel);
//! ```

mod config;
mod controller;
mod errors;
mod event;
mod gate;
mod model;
mod notifier;
mod reducer;
mod state;
mod view;
mod widget;

pub use config::{PanelConfig, PanelConfigBuilder, ResizableSide};
pub use controller::ResizeController;
pub use errors::PanelConfigError;
pub use event::{PanelEffect, PanelEvent, PanelIntent};
pub use gate::BreakpointGate;
pub use model::{CursorHint, PanelId, PanelLayout, ResizeState, Visibility};
pub use notifier::{PanelWidths, WidthNotifier, WidthSubscription};
pub use view::{PanelView, RESIZE_STRIP_WIDTH};
pub use widget::{PanelViewModel, SidePanel};
