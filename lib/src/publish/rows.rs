use strum::IntoEnumIterator;

use super::format::{offset_label, seconds_from_gmt};
use super::state::PublishState;
use super::view_model::PublishSettingsViewModel;

/// Kinds of rows a publish settings screen can show, in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumIter)]
pub enum RowKind {
    DateTime,
    TimeZone,
}

/// What selecting a row should do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    PickDate,
    ShowTimeZone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSpec {
    pub kind: RowKind,
    pub title: String,
    pub detail: String,
    pub action: RowAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    pub rows: Vec<RowSpec>,
    pub footer: Option<String>,
}

/// Row kinds relevant for the given state.
pub fn row_kinds(state: &PublishState) -> Vec<RowKind> {
    match state {
        PublishState::Immediate | PublishState::Published(_) => vec![RowKind::DateTime],
        PublishState::Scheduled(_) => RowKind::iter().collect(),
    }
}

pub fn project(vm: &PublishSettingsViewModel) -> Projection {
    let rows = row_kinds(&vm.state())
        .into_iter()
        .map(|kind| row(vm, kind))
        .collect();

    Projection {
        rows,
        footer: footer_text(vm),
    }
}

fn row(vm: &PublishSettingsViewModel, kind: RowKind) -> RowSpec {
    let language = vm.language();
    match kind {
        RowKind::DateTime => RowSpec {
            kind,
            title: language.publish_date().to_string(),
            detail: vm.detail_string(),
            action: RowAction::PickDate,
        },
        RowKind::TimeZone => {
            let tz = vm.time_zone();
            let detail = match vm.date() {
                Some(date) => format!(
                    "{} ({})",
                    tz.name(),
                    offset_label(seconds_from_gmt(&tz, &date))
                ),
                None => tz.name().to_string(),
            };
            RowSpec {
                kind,
                title: language.time_zone().to_string(),
                detail,
                action: RowAction::ShowTimeZone,
            }
        }
    }
}

/// Footer describing when the post goes (or went) live, in site time.
pub fn footer_text(vm: &PublishSettingsViewModel) -> Option<String> {
    let date = vm.date()?;
    let tz = vm.time_zone();
    let formatted = vm.date_formatter().format(&date);
    let offset = offset_label(seconds_from_gmt(&tz, &date));

    let language = vm.language();
    Some(match vm.state() {
        PublishState::Scheduled(_) | PublishState::Immediate => {
            language.will_publish_footer(&formatted, &offset)
        }
        PublishState::Published(_) => language.was_published_footer(&formatted, &offset),
    })
}
