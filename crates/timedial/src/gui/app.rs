use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::picker::{Behavior, PickerMode, SurfaceError, TouchEvent};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type Picker = Behavior<PickerMode>;

pub struct AppInit {
    pub config: Config,
    pub mode_override: Option<PickerMode>,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub picker: Rc<RefCell<Picker>>,
    pub mode: PickerMode,
    pub mode_override: Option<PickerMode>,
    pub value: Option<i32>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    Touch(TouchEvent),
    Value(i32),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn title(&self) -> String {
        format!("Time Dial ({})", self.mode)
    }

    fn label(&self) -> String {
        self.value
            .map(|v| format!("{v:02}"))
            .unwrap_or_else(|| "--".to_string())
    }

    fn apply_config(&mut self, config: &Config) {
        self.mode = self.mode_override.unwrap_or(config.mode);

        let mut picker = self.picker.borrow_mut();
        picker.set_mapper(self.mode);
        picker.set_colors(config.colors());
        picker.dial_mut().set_line_width(config.line_width);
        if self.value.is_some() {
            self.value = Some(picker.value());
        }
    }
}

fn paint(cr: &cairo::Context, picker: &Picker, colors: &ThemeColors) -> Result<(), SurfaceError> {
    let (r, g, b, a) = colors.backdrop.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.paint()?;

    let mut surface = cr.clone();
    picker.on_draw(&mut surface)
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            #[watch]
            set_title: Some(&model.title()),
            set_default_size: (480, 480),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "overlay"]
            gtk::Overlay {
                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width, height));
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::Touch(TouchEvent::press(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::Touch(TouchEvent::moved(x + dx, y + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |gesture, dx, dy| {
                            let (x, y) = gesture.start_point().unwrap_or_default();
                            sender.input(AppMsg::Touch(TouchEvent::release(x + dx, y + dy)));
                        },
                    },
                },

                add_overlay = &gtk::Label {
                    set_halign: gtk::Align::Center,
                    set_valign: gtk::Align::Center,
                    set_can_target: false,
                    add_css_class: "timedial-value",
                    #[watch]
                    set_label: &model.label(),
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            mode_override,
            events,
        } = init;

        theme::load_css();

        let mode = mode_override.unwrap_or(config.mode);
        let mut picker = Behavior::standard(mode, config.colors(), config.line_width);
        picker.set_picker_active(true);

        let input = sender.input_sender().clone();
        picker.set_value_listener(move |value: i32| input.emit(AppMsg::Value(value)));

        let model = AppModel {
            picker: Rc::new(RefCell::new(picker)),
            mode,
            mode_override,
            value: None,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let picker_draw = model.picker.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = paint(cr, &picker_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(width, height) => {
                if let Err(e) = self.picker.borrow_mut().on_size_changed(width, height) {
                    log::warn!("Ignoring resize: {}", e);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::Touch(event) => {
                self.picker.borrow_mut().on_touch_event(event);
                self.drawing_area.queue_draw();
            }
            AppMsg::Value(value) => {
                self.value = Some(value);
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.apply_config(&new_config);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}
