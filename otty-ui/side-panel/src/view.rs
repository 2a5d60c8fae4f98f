use iced::widget::{Row, Space, container, mouse_area, scrollable};
use iced::{Element, Length, Theme, mouse};

use crate::config::ResizableSide;
use crate::widget::PanelViewModel;

/// Width of the draggable edge strip.
pub const RESIZE_STRIP_WIDTH: f32 = 5.0;

type StyleFn<'a> = dyn Fn(&Theme) -> container::Style + 'a;

/// Element builder for a side panel.
///
/// The strip only reports presses and releases. Cursor motion must be
/// forwarded by the host in window coordinates (typically from a
/// `mouse_area` wrapping the whole layout) so deltas stay stable while the
/// panel edge moves under the pointer.
pub struct PanelView<'a, Message> {
    vm: PanelViewModel,
    content: Element<'a, Message>,
    on_drag_start: Option<Message>,
    on_drag_end: Option<Message>,
    style: Option<Box<StyleFn<'a>>>,
    strip_style: Option<Box<StyleFn<'a>>>,
    scrollbar: bool,
}

impl<'a, Message: Clone + 'a> PanelView<'a, Message> {
    pub fn new(
        vm: PanelViewModel,
        content: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            vm,
            content: content.into(),
            on_drag_start: None,
            on_drag_end: None,
            style: None,
            strip_style: None,
            scrollbar: true,
        }
    }

    /// Emit a message when the strip is pressed.
    pub fn on_drag_start(mut self, message: Message) -> Self {
        self.on_drag_start = Some(message);
        self
    }

    /// Emit a message when the pointer is released over the strip.
    pub fn on_drag_end(mut self, message: Message) -> Self {
        self.on_drag_end = Some(message);
        self
    }

    /// Decoration of the panel box.
    pub fn style(
        mut self,
        style: impl Fn(&Theme) -> container::Style + 'a,
    ) -> Self {
        self.style = Some(Box::new(style));
        self
    }

    /// Decoration of the affordance strip.
    pub fn strip_style(
        mut self,
        style: impl Fn(&Theme) -> container::Style + 'a,
    ) -> Self {
        self.strip_style = Some(Box::new(style));
        self
    }

    /// Wrap the content in a vertical scrollable (on by default).
    pub fn scrollbar(mut self, scrollbar: bool) -> Self {
        self.scrollbar = scrollbar;
        self
    }

    /// Build the `Element` for the panel.
    pub fn view(self) -> Element<'a, Message> {
        let layout = self.vm.layout;
        if layout.is_collapsed() {
            return Space::new()
                .width(Length::Fixed(0.0))
                .height(Length::Fixed(0.0))
                .into();
        }

        let body: Element<'a, Message> = if self.scrollbar {
            scrollable(self.content)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            self.content
        };

        let body = container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true);

        let content: Element<'a, Message> = if self.vm.is_resizable {
            let strip = build_strip(
                self.on_drag_start,
                self.on_drag_end,
                self.strip_style,
            );
            let row = match self.vm.side {
                ResizableSide::Left => Row::new().push(strip).push(body),
                ResizableSide::Right => Row::new().push(body).push(strip),
            };
            row.width(Length::Fill).height(Length::Fill).into()
        } else {
            body.into()
        };

        let panel = container(content)
            .width(Length::Fixed(layout.width))
            .height(Length::Fixed(layout.height));

        match self.style {
            Some(style) => panel.style(move |theme| style(theme)).into(),
            None => panel.into(),
        }
    }
}

fn build_strip<'a, Message: Clone + 'a>(
    on_drag_start: Option<Message>,
    on_drag_end: Option<Message>,
    style: Option<Box<StyleFn<'a>>>,
) -> Element<'a, Message> {
    let strip = container(Space::new())
        .width(Length::Fixed(RESIZE_STRIP_WIDTH))
        .height(Length::Fill);
    let strip = match style {
        Some(style) => strip.style(move |theme| style(theme)),
        None => strip,
    };

    let mut area = mouse_area(strip);
    if let Some(message) = on_drag_start {
        area = area.on_press(message);
    }
    if let Some(message) = on_drag_end {
        area = area.on_release(message);
    }

    // iced has no directional resize cursors; hosts that drive native
    // cursors use `PanelViewModel::cursor_icon` instead.
    area.interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}
