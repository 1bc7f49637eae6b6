//! Main application state and rendering for the Diligence GUI

use crate::api::DiligenceClient;
use crate::components::{Alert, Required, TextInputState, ValidationRule, ALERT_WIDTH};
use crate::report::{self, BlockKind, HtmlBlock, ReportView, Section};
use crate::settings::AppSettings;
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use log::{error, info};
use std::sync::Arc;

/// Main application state
pub struct DiligenceApp {
    /// Theme configuration
    theme: Theme,
    /// Ticker entry field state
    ticker_input: TextInputState,
    /// Whether a request is in flight; drives the loading indicator
    loading: bool,
    /// Rendered report state, fully replaced per successful fetch
    report: ReportView,
    /// Currently displayed alert, if any
    alert: Option<Alert>,
    /// API client for backend communication
    api_client: Arc<DiligenceClient>,
    /// Focus handle for keyboard input
    focus_handle: FocusHandle,
}

impl DiligenceApp {
    pub fn new(settings: AppSettings, cx: &mut Context<Self>) -> Self {
        let api_client = Arc::new(DiligenceClient::with_url(settings.api.base_url.clone()));

        Self {
            theme: settings.resolve_theme(),
            ticker_input: TextInputState::new()
                .with_label("Stock Ticker")
                .with_placeholder("e.g. AAPL"),
            loading: false,
            report: ReportView::Empty,
            alert: None,
            api_client,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Run the due-diligence request for the ticker currently in the input.
    ///
    /// An empty field never reaches the network. There is no in-flight guard
    /// and no timeout; a second trigger simply starts a second request and
    /// the later continuation wins.
    pub fn fetch_due_diligence(&mut self, cx: &mut Context<Self>) {
        if !Required::new().validate(&self.ticker_input.value).is_valid() {
            self.alert = Some(Alert::empty_ticker());
            cx.notify();
            return;
        }
        let ticker = self.ticker_input.trimmed().to_string();

        self.loading = true;
        cx.notify();
        info!("fetching due diligence for {}", ticker);
        let client = self.api_client.clone();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = client.fetch_due_diligence(&ticker).await;

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |app: &mut Self, cx: &mut Context<Self>| {
                        // Hide the indicator on every exit path before
                        // looking at the result.
                        app.loading = false;
                        match result {
                            Ok(response) => {
                                app.display_due_diligence(&response.dd.due_diligence);
                            }
                            Err(e) => {
                                error!("due diligence request for {} failed: {}", ticker, e);
                                app.alert = Some(Alert::fetch_failed());
                            }
                        }
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    /// Replace the report area with sections built from the response mapping.
    ///
    /// Prior sections and their collapse state are discarded wholesale; a
    /// payload that is not an object renders as the invalid-data message.
    pub fn display_due_diligence(&mut self, value: &serde_json::Value) {
        self.report = match report::sections_from_value(value) {
            Some(sections) => ReportView::Sections(sections),
            None => ReportView::InvalidData,
        };
    }

    /// Toggle one section's body; siblings are unaffected
    pub fn toggle_section(&mut self, ix: usize, cx: &mut Context<Self>) {
        if let ReportView::Sections(sections) = &mut self.report {
            if let Some(section) = sections.get_mut(ix) {
                section.toggle();
                cx.notify();
            }
        }
    }

    pub fn dismiss_alert(&mut self, cx: &mut Context<Self>) {
        self.alert = None;
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;

        if self.alert.is_some() {
            if keystroke.key == "escape" || keystroke.key == "enter" {
                self.dismiss_alert(cx);
            }
            return;
        }

        match keystroke.key.as_str() {
            "enter" => self.fetch_due_diligence(cx),
            "backspace" => {
                self.ticker_input.backspace();
                cx.notify();
            }
            _ => {
                if keystroke.modifiers.control || keystroke.modifiers.platform {
                    return;
                }
                if let Some(text) = keystroke.key_char.clone() {
                    self.ticker_input.insert(&text);
                    cx.notify();
                }
            }
        }
    }
}

impl Focusable for DiligenceApp {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for DiligenceApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .id("diligence-app")
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.background)
            .text_color(theme.text)
            .font_family("Inter")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .child(self.render_header())
            .child(self.render_query_row(cx))
            .child(self.render_report_area(cx))
            .when_some(self.alert.clone(), |el, alert| {
                el.child(self.render_alert(&alert, cx))
            })
    }
}

impl DiligenceApp {
    fn render_header(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .px(px(28.0))
            .py(px(18.0))
            .flex()
            .items_center()
            .gap(px(14.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .child(
                div()
                    .size(px(38.0))
                    .bg(theme.accent)
                    .rounded(px(10.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(19.0))
                            .font_weight(FontWeight::BLACK)
                            .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                            .child("D"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(17.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child("Diligence"),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(theme.text_dimmed)
                            .child("Stock Due Diligence Reports"),
                    ),
            )
    }

    fn render_query_row(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .px(px(28.0))
            .py(px(20.0))
            .flex()
            .items_end()
            .gap(px(16.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .child(div().w(px(280.0)).child(self.ticker_input.render(theme)))
            .child(self.render_run_button(cx))
            .when(self.loading, |el| el.child(self.render_loading_indicator()))
    }

    fn render_run_button(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .id("run-due-diligence")
            .px(px(18.0))
            .py(px(10.0))
            .rounded(px(8.0))
            .bg(theme.accent_subtle)
            .border_1()
            .border_color(theme.accent_muted)
            .text_size(px(13.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.accent)
            .cursor_pointer()
            .hover(|s| s.bg(theme.accent_subtle).border_color(theme.accent))
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.fetch_due_diligence(cx);
            }))
            .child("Run Due Diligence")
    }

    fn render_loading_indicator(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .px(px(12.0))
            .py(px(8.0))
            .rounded(px(6.0))
            .bg(theme.accent_subtle)
            .text_size(px(12.0))
            .font_weight(FontWeight::MEDIUM)
            .text_color(theme.accent)
            .child("Generating report...")
    }

    fn render_report_area(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match &self.report {
            ReportView::Empty => self.render_empty_state().into_any_element(),
            ReportView::InvalidData => self.render_invalid_data().into_any_element(),
            ReportView::Sections(sections) => {
                self.render_sections(sections, cx).into_any_element()
            }
        };

        div()
            .id("report-area")
            .flex_grow()
            .p(px(28.0))
            .overflow_y_scroll()
            .child(content)
    }

    fn render_sections(&self, sections: &[Section], cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        let mut container = div().flex().flex_col().gap(px(12.0));

        // An empty mapping legitimately renders zero blocks
        if !sections.is_empty() {
            container = container.child(
                div()
                    .text_size(px(13.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text_muted)
                    .child(format!("{} Report Sections", sections.len())),
            );
        }

        container.children(
            sections
                .iter()
                .enumerate()
                .map(|(ix, section)| self.render_section_block(ix, section, cx))
                .collect::<Vec<_>>(),
        )
    }

    fn render_section_block(
        &self,
        ix: usize,
        section: &Section,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;

        let mut block = div()
            .rounded(px(12.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .overflow_hidden()
            // Title row; clicking toggles this block only
            .child(
                div()
                    .id(SharedString::from(format!("section-{}", ix)))
                    .px(px(20.0))
                    .py(px(14.0))
                    .flex()
                    .items_center()
                    .justify_between()
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.hover_bg))
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.toggle_section(ix, cx);
                    }))
                    .child(
                        div()
                            .text_size(px(15.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.text)
                            .child(section.title.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(theme.text_dimmed)
                            .child(if section.expanded { "\u{25be}" } else { "\u{25b8}" }),
                    ),
            );

        if section.expanded {
            block = block.child(
                div()
                    .px(px(20.0))
                    .py(px(16.0))
                    .flex()
                    .flex_col()
                    .gap(px(10.0))
                    .border_t_1()
                    .border_color(theme.border_subtle)
                    .children(
                        report::html_blocks(&section.body)
                            .into_iter()
                            .map(|b| self.render_html_block(b))
                            .collect::<Vec<_>>(),
                    ),
            );
        }

        block
    }

    fn render_html_block(&self, block: HtmlBlock) -> impl IntoElement {
        let theme = &self.theme;

        let (size, weight, color) = match block.kind {
            BlockKind::Heading => (px(16.0), FontWeight::BOLD, theme.text),
            BlockKind::Subheading => (px(14.0), FontWeight::SEMIBOLD, theme.text),
            BlockKind::Paragraph => (px(13.0), FontWeight::NORMAL, theme.text_secondary),
        };

        div()
            .text_size(size)
            .font_weight(weight)
            .text_color(color)
            .child(block.text)
    }

    fn render_invalid_data(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .p(px(20.0))
            .rounded(px(8.0))
            .bg(theme.negative_subtle)
            .border_1()
            .border_color(theme.negative_muted)
            .text_size(px(14.0))
            .font_weight(FontWeight::MEDIUM)
            .text_color(theme.negative)
            .child("Invalid data format received")
    }

    fn render_empty_state(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .p(px(40.0))
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(8.0))
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(theme.text_muted)
                    .child("Enter a ticker to generate a due-diligence report"),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_dimmed)
                    .child("Sections arrive from the local analysis backend"),
            )
    }

    fn render_alert(&self, alert: &Alert, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let accent = alert.kind.color(theme);

        div()
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            // Backdrop dismisses, same as clicking OK
            .child(
                div()
                    .id("alert-backdrop")
                    .absolute()
                    .inset_0()
                    .bg(hsla(0.0, 0.0, 0.0, 0.5))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.dismiss_alert(cx);
                    })),
            )
            .child(
                div()
                    .w(px(ALERT_WIDTH))
                    .p(px(24.0))
                    .rounded(px(12.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(theme.border_strong)
                    .flex()
                    .flex_col()
                    .gap(px(16.0))
                    .child(
                        div()
                            .text_size(px(15.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(accent)
                            .child(alert.kind.title()),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_secondary)
                            .child(alert.message.clone()),
                    )
                    .child(
                        div().flex().justify_end().child(
                            div()
                                .id("alert-ok")
                                .px(px(16.0))
                                .py(px(8.0))
                                .rounded(px(6.0))
                                .bg(theme.accent_subtle)
                                .text_size(px(13.0))
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(theme.accent)
                                .cursor_pointer()
                                .hover(|s| s.bg(theme.hover_bg))
                                .on_click(cx.listener(|this, _event, _window, cx| {
                                    this.dismiss_alert(cx);
                                }))
                                .child("OK"),
                        ),
                    ),
            )
    }
}
