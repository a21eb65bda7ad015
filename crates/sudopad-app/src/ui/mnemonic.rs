use eframe::egui::{Align, FontSelection, Response, RichText, Style, Ui, text::LayoutJob};
use sudopad_shortcut::{MnemonicLabel, ShortcutRegistry};

use crate::{action::ActionRequestQueue, command::Command};

/// Builds a layout job for `label`, underlining the shortcut key when `underline` is set.
#[must_use]
pub fn layout_job(label: &MnemonicLabel, underline: bool, style: &Style) -> LayoutJob {
    let mut job = LayoutJob::default();
    let mut shortcut = RichText::new(&label.shortcut);
    if underline {
        shortcut = shortcut.underline();
    }
    for part in [RichText::new(&label.pre), shortcut, RichText::new(&label.post)] {
        part.append_to(&mut job, style, FontSelection::Default, Align::Center);
    }
    job
}

/// Draws a selectable command button labelled with its mnemonic.
///
/// The label is registered with `registry` as it is drawn, and a click requests
/// the command's action.
pub fn command_button(
    ui: &mut Ui,
    registry: &mut ShortcutRegistry,
    command: Command,
    selected: bool,
    underline: bool,
    action_queue: &mut ActionRequestQueue,
) -> Option<Response> {
    let label = command.register(registry)?;
    let job = layout_job(&label, underline, ui.style());
    let response = ui
        .selectable_label(selected, job)
        .on_hover_text(format!("Shortcut: {}", label.shortcut.to_uppercase()));
    if response.clicked() {
        action_queue.request(command.to_action());
    }
    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_job_keeps_label_text() {
        let label = sudopad_shortcut::LabelMatch::parse("Clear _C_ells").into_label();
        let job = layout_job(&label, true, &Style::default());
        assert_eq!(job.text, "Clear Cells");
        assert_eq!(job.sections.len(), 3);
        assert!(job.sections[1].format.underline.width > 0.0);

        let plain = layout_job(&label, false, &Style::default());
        assert_eq!(plain.sections[1].format.underline.width, 0.0);
    }
}
