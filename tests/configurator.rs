use pubstyle::models::{FontChoice, FontFamily};
use pubstyle::palette::Rgba;
use pubstyle::profile::{GridAxis, GridWhich, LegendLocation, LineStyle, StyleProfile};
use pubstyle::{ExportSignal, StyleConfigurator, StyleError, StyleRequest};

fn serif_request() -> StyleRequest {
    StyleRequest {
        font_family: FontFamily::Serif,
        ..StyleRequest::default()
    }
}

#[test]
fn apply_is_idempotent() {
    let req = serif_request();
    let mut once = StyleConfigurator::new();
    once.apply(&req).unwrap();

    let mut twice = StyleConfigurator::new();
    twice.apply(&req).unwrap();
    twice.apply(&req).unwrap();

    assert_eq!(once.defaults(), twice.defaults());
}

#[test]
fn apply_does_not_accumulate_previous_requests() {
    let mut session = StyleConfigurator::new();
    session
        .apply(&StyleRequest {
            font_name: FontChoice::from("Latin Modern Roman"),
            font_size: 20.0,
            ..serif_request()
        })
        .unwrap();
    session.apply(&StyleRequest::default()).unwrap();

    let fresh = StyleProfile::from_request(&StyleRequest::default()).unwrap();
    assert_eq!(session.defaults(), &fresh);
}

#[test]
fn invalid_family_is_rejected() {
    let err = "italic".parse::<FontFamily>().unwrap_err();
    assert_eq!(
        err,
        StyleError::InvalidConfiguration("family must be serif or sans-serif".into())
    );
}

#[test]
fn invalid_columns_leave_session_untouched() {
    let mut session = StyleConfigurator::new();
    session
        .apply(&StyleRequest {
            mark_for_export: true,
            export_name: "before".into(),
            ..serif_request()
        })
        .unwrap();
    session.figure();
    let before = session.defaults().clone();

    let err = session
        .apply(&StyleRequest {
            columns_per_page: 4,
            clear_previous: true,
            mark_for_export: true,
            export_name: "after".into(),
            ..StyleRequest::default()
        })
        .unwrap_err();

    assert_eq!(
        err,
        StyleError::InvalidConfiguration("unsupported column count".into())
    );
    assert_eq!(session.defaults(), &before);
    assert_eq!(session.open_figures().len(), 1);
    assert_eq!(session.export_signal().name, "before");
}

#[test]
fn export_signal_is_sticky() {
    let mut session = StyleConfigurator::new();
    let signal = session
        .apply(&StyleRequest {
            mark_for_export: true,
            export_name: "fig1".into(),
            ..StyleRequest::default()
        })
        .unwrap();
    assert_eq!(
        signal,
        ExportSignal {
            pending: true,
            name: "fig1".into()
        }
    );

    // A request without export leaves the previous signal in place.
    let signal = session.apply(&StyleRequest::default()).unwrap();
    assert!(signal.pending);
    assert_eq!(signal.name, "fig1");

    assert_eq!(session.take_export(), Some("fig1".into()));
    assert!(!session.export_signal().pending);
}

#[test]
fn clear_previous_closes_figures() {
    let mut session = StyleConfigurator::new();
    session.apply(&StyleRequest::default()).unwrap();
    session.figure();
    session.figure();
    assert_eq!(session.open_figures().len(), 2);

    session.apply(&StyleRequest::default()).unwrap();
    assert_eq!(session.open_figures().len(), 2);

    session
        .apply(&StyleRequest {
            clear_previous: true,
            ..StyleRequest::default()
        })
        .unwrap();
    assert!(session.open_figures().is_empty());
}

#[test]
fn figures_keep_the_profile_they_were_opened_with() {
    let mut session = StyleConfigurator::new();
    session.apply(&serif_request()).unwrap();
    session.figure();
    session.apply(&StyleRequest::default()).unwrap();
    session.figure();

    let figs = session.open_figures();
    assert_eq!(figs[0].profile().typography.family, FontFamily::Serif);
    assert_eq!(figs[1].profile().typography.family, FontFamily::SansSerif);
}

#[test]
fn font_fallbacks() {
    let p = StyleProfile::from_request(&serif_request()).unwrap();
    assert_eq!(p.typography.fonts, vec!["DejaVu Serif", "Times New Roman"]);

    let p = StyleProfile::from_request(&StyleRequest {
        font_name: FontChoice::from("Latin Modern Roman"),
        ..serif_request()
    })
    .unwrap();
    assert_eq!(p.typography.fonts, vec!["Latin Modern Roman"]);

    let p = StyleProfile::from_request(&StyleRequest::default()).unwrap();
    assert_eq!(p.typography.fonts, vec!["DejaVu Sans", "Arial"]);
}

#[test]
fn publication_chrome() {
    let p = StyleProfile::from_request(&StyleRequest {
        dpi: 300,
        ..StyleRequest::default()
    })
    .unwrap();

    assert_eq!(p.figure.dpi, 300);
    assert_eq!(p.figure.face, Rgba::TRANSPARENT);
    assert_eq!(p.figure.edge, Rgba::TRANSPARENT);
    let m = p.figure.margins;
    assert_eq!((m.left, m.right, m.bottom, m.top), (0.1, 0.98, 0.1, 0.88));
    assert_eq!((m.wspace, m.hspace), (0.2, 0.2));

    assert!(p.axes.axis_below);
    assert_eq!(p.axes.label_pad_pt, 2.0);
    assert!(p.ticks.sides.bottom && p.ticks.sides.left);
    assert!(!p.ticks.sides.top && !p.ticks.sides.right);
    assert!(p.ticks.minor_visible);
    assert_eq!(p.ticks.major.size_pt, 3.0);
    assert_eq!(p.ticks.minor.size_pt, 1.0);

    assert!(p.grid.enabled);
    assert_eq!(p.grid.axis, GridAxis::Both);
    assert_eq!(p.grid.which, GridWhich::Both);
    assert_eq!(p.grid.line_style, LineStyle::Solid);
    assert_eq!(p.grid.alpha, 1.0);

    let l = &p.legend;
    assert_eq!(l.location, LegendLocation::UpperLeft);
    assert!(l.fancy_box);
    assert_eq!((l.face, l.edge), (Rgba::WHITE, Rgba::BLACK));
    assert_eq!(l.frame_alpha, 1.0);
    assert_eq!(
        (l.column_spacing, l.label_spacing, l.handle_text_pad, l.marker_scale),
        (1.0, 0.5, 0.4, 1.0)
    );
}

#[test]
fn reset_restores_baseline() {
    let mut session = StyleConfigurator::new();
    session.apply(&serif_request()).unwrap();
    session.reset();
    assert_eq!(session.defaults(), &StyleProfile::baseline());
}
