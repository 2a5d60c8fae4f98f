use std::cell::Cell;
use std::rc::Rc;

use env_logger::Env;
use iced::widget::{container, mouse_area, row, text};
use iced::{Color, Element, Length, Point, Size, Subscription, Task, window};
use otty_ui_side_panel::{
    PanelConfig, PanelEffect, PanelEvent, PanelId, PanelIntent, PanelView,
    ResizableSide, SidePanel, WidthNotifier, WidthSubscription,
};

const INITIAL_WINDOW: Size = Size::new(1024.0, 768.0);

const INSPECTOR_CONFIG: &str = r#"{
    "min_width": 220,
    "max_width": 480,
    "start_width": 260,
    "resizable_side": "left",
    "scaffold_breakpoint": 720
}"#;

#[derive(Debug, Clone)]
enum Message {
    Explorer(PanelEvent),
    Inspector(PanelEvent),
    CursorMoved(Point),
    Released,
    Window(window::Event),
}

struct Scaffold {
    explorer: SidePanel,
    inspector: SidePanel,
    viewport: Size,
    sidebars_width: Rc<Cell<f32>>,
    _widths: WidthSubscription,
}

impl Scaffold {
    fn new() -> (Self, Task<Message>) {
        let notifier = WidthNotifier::new();
        let sidebars_width = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&sidebars_width);
        let widths = notifier.subscribe(move |widths| {
            sink.set(widths.values().sum());
        });

        let explorer_config = PanelConfig::builder(160.0, 420.0)
            .start_width(240.0)
            .resizable_side(ResizableSide::Right)
            .scaffold_breakpoint(480.0)
            .build()
            .expect("explorer config is valid");
        let inspector_config = PanelConfig::from_json(INSPECTOR_CONFIG)
            .expect("inspector config is valid");

        let mut scaffold = Self {
            explorer: SidePanel::new(
                PanelId::new(),
                explorer_config,
                notifier.clone(),
            ),
            inspector: SidePanel::new(
                PanelId::new(),
                inspector_config,
                notifier,
            ),
            viewport: INITIAL_WINDOW,
            sidebars_width,
            _widths: widths,
        };
        scaffold.explorer.layout(INITIAL_WINDOW);
        scaffold.inspector.layout(INITIAL_WINDOW);

        (scaffold, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Explorer(event) => {
                route(&mut self.explorer, event).map(Message::Explorer)
            },
            Message::Inspector(event) => {
                route(&mut self.inspector, event).map(Message::Inspector)
            },
            Message::CursorMoved(position) => {
                let intent = PanelIntent::CursorMoved { position };
                Task::batch([
                    self.explorer.reduce(intent.clone()).map(Message::Explorer),
                    self.inspector.reduce(intent).map(Message::Inspector),
                ])
            },
            Message::Released => Task::batch([
                self.explorer
                    .reduce(PanelIntent::DragEnded)
                    .map(Message::Explorer),
                self.inspector
                    .reduce(PanelIntent::DragEnded)
                    .map(Message::Inspector),
            ]),
            Message::Window(window::Event::Resized(size)) => {
                self.viewport = size;
                let intent = PanelIntent::ViewportChanged(size);
                Task::batch([
                    self.explorer.reduce(intent.clone()).map(Message::Explorer),
                    self.inspector.reduce(intent).map(Message::Inspector),
                ])
            },
            Message::Window(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let explorer = self.explorer.view(text("Explorer"), |intent| {
            Message::Explorer(PanelEvent::Intent(intent))
        });

        let inspector = PanelView::new(self.inspector.vm(), text("Inspector"))
            .on_drag_start(Message::Inspector(PanelIntent::DragStarted.into()))
            .scrollbar(false)
            .strip_style(|_| container::Style {
                background: Some(Color::from_rgb(0.25, 0.35, 0.6).into()),
                ..Default::default()
            })
            .view();

        let content_width =
            (self.viewport.width - self.sidebars_width.get()).max(0.0);
        let content = container(text(format!(
            "content area: {content_width:.0}px"
        )))
        .center(Length::Fill);

        let layout = row![explorer, content, inspector]
            .width(Length::Fill)
            .height(Length::Fill);

        mouse_area(layout)
            .on_move(Message::CursorMoved)
            .on_release(Message::Released)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        window::events().map(|(_id, event)| Message::Window(event))
    }
}

fn route(panel: &mut SidePanel, event: PanelEvent) -> Task<PanelEvent> {
    match event {
        PanelEvent::Intent(intent) => panel.reduce(intent),
        PanelEvent::Effect(PanelEffect::WidthChanged { id, width }) => {
            log::info!("panel {id} resized to {width:.0}");
            Task::none()
        },
        PanelEvent::Effect(PanelEffect::VisibilityChanged { id, visibility }) => {
            log::info!("panel {id} is {visibility:?}");
            Task::none()
        },
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(Scaffold::new, Scaffold::update, Scaffold::view)
        .title("side panel scaffold")
        .window(window::Settings {
            size: INITIAL_WINDOW,
            ..window::Settings::default()
        })
        .subscription(Scaffold::subscription)
        .run()
}
