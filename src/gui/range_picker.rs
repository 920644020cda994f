//! Range Picker Widget
//! "From"/"To" date pickers that set the visible range of the filtered panels.

use chrono::NaiveDate;
use egui::RichText;
use egui_extras::DatePickerButton;
use range_charts::data::DateRange;

/// What the picker asks the app to do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePickerAction {
    None,
    Changed(DateRange),
}

/// Two independent day pickers. No ordering is enforced between them.
pub struct RangePicker {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl RangePicker {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Selected range, both ends at midnight.
    pub fn range(&self) -> DateRange {
        DateRange::from_days(self.from, self.to)
    }

    /// Draw the pickers
    pub fn show(&mut self, ui: &mut egui::Ui) -> RangePickerAction {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("From: ").size(14.0));
            changed |= ui
                .add(DatePickerButton::new(&mut self.from).id_salt("range_from"))
                .changed();

            ui.add_space(10.0);

            ui.label(RichText::new("To: ").size(14.0));
            changed |= ui
                .add(DatePickerButton::new(&mut self.to).id_salt("range_to"))
                .changed();
        });

        if changed {
            RangePickerAction::Changed(self.range())
        } else {
            RangePickerAction::None
        }
    }
}
