use chart_axes::ChartError;
use chart_axes::api::{Chart, ChartConfig};
use chart_axes::core::{AxisGroup, AxisKey, AxisOptions, SeriesOptions};

const DUAL_AXIS_CONFIG: &str = r#"{
    "yAxisDefaults": { "opposite": false },
    "xAxis": [{ "title": "Time" }],
    "yAxis": [
        { "title": "Price" },
        { "id": "volume", "title": "Volume", "opposite": true, "min": 0 }
    ],
    "series": [
        { "name": "close" },
        { "name": "volume", "yAxis": "volume" },
        { "name": "share", "cartesian": false }
    ]
}"#;

#[test]
fn chart_from_json_config_binds_series_to_configured_axes() {
    let config = ChartConfig::from_json_str(DUAL_AXIS_CONFIG).expect("parse config");
    let bootstrap = Chart::from_config(config).expect("build chart");
    assert!(bootstrap.is_fully_bound());
    let chart = bootstrap.chart;

    assert_eq!(chart.axis_count(AxisGroup::X), 1);
    assert_eq!(chart.axis_count(AxisGroup::Y), 2);
    assert_eq!(chart.series_count(), 3);

    let volume_axis = chart
        .axis_by_id(AxisGroup::Y, "volume")
        .expect("volume axis");
    assert_eq!(volume_axis.index(), 1);
    assert_eq!(volume_axis.options().opposite, Some(true));
    assert_eq!(volume_axis.options().min, Some(0.0));
    assert_eq!(volume_axis.series().len(), 1);

    let price_axis = chart.axis_at(AxisGroup::Y, 0).expect("price axis");
    assert_eq!(price_axis.options().opposite, Some(false));
    assert_eq!(price_axis.series().len(), 1);

    let names: Vec<_> = chart
        .series_iter()
        .filter(|series| series.is_plot_ready())
        .filter_map(|series| series.name())
        .collect();
    assert_eq!(names, vec!["close", "volume"]);
}

#[test]
fn config_with_dangling_selector_keeps_series_and_reports_failure() {
    let config = ChartConfig::cartesian().with_series(SeriesOptions::default().with_y_axis(3));
    let bootstrap = Chart::from_config(config).expect("axes are valid");

    assert_eq!(bootstrap.chart.series_count(), 1);
    assert_eq!(bootstrap.binding_failures.len(), 1);
    assert!(matches!(
        bootstrap.binding_failures[0],
        ChartError::MissingAxis {
            group: AxisGroup::Y,
            ..
        }
    ));
    let series = bootstrap.chart.series_iter().next().expect("series kept");
    assert!(!series.is_plot_ready());

    let err = bootstrap.into_plot_ready().expect_err("y axis 3 does not exist");
    assert!(matches!(err, ChartError::MissingAxis { group: AxisGroup::Y, .. }));
}

#[test]
fn invalid_axis_options_still_abort_construction() {
    let config = ChartConfig::default().with_x_axis(AxisOptions::default().with_range(5.0, 1.0));
    let err = Chart::from_config(config).expect_err("min above max");
    assert!(matches!(err, ChartError::InvalidAxisOptions(_)));
}

#[test]
fn chart_with_unbound_series_survives_export_and_rebuild() {
    let mut chart = Chart::from_config(ChartConfig::cartesian())
        .expect("build chart")
        .chart;
    chart
        .add_series(SeriesOptions::default().with_name("close"))
        .expect("bind close");
    let err = chart
        .add_series(SeriesOptions::default().with_name("volume").with_y_axis("volume"))
        .expect_err("no volume axis");
    let volume = match err {
        ChartError::MissingAxis { series, .. } => series,
        other => panic!("unexpected error: {other}"),
    };
    assert_eq!(chart.series_count(), 2);
    assert!(!chart.is_plot_ready(volume));

    let restored = Chart::from_config(chart.to_config()).expect("rebuild chart");

    assert_eq!(restored.binding_failures.len(), 1);
    assert!(matches!(
        restored.binding_failures[0],
        ChartError::MissingAxis {
            group: AxisGroup::Y,
            ..
        }
    ));
    let restored = restored.chart;
    assert_eq!(restored.series_count(), 2);
    let ready: Vec<_> = restored
        .series_iter()
        .map(|series| (series.name(), series.is_plot_ready()))
        .collect();
    assert_eq!(ready, vec![(Some("close"), true), (Some("volume"), false)]);
}

#[test]
fn removing_a_free_axis_before_export_matches_after_rebind() {
    let config = ChartConfig::default()
        .with_x_axis(AxisOptions::default())
        .with_x_axis(AxisOptions::default())
        .with_x_axis(AxisOptions::default())
        .with_y_axis(AxisOptions::default())
        .with_series(SeriesOptions::default().with_x_axis(1));
    let mut chart = Chart::from_config(config)
        .and_then(|bootstrap| bootstrap.into_plot_ready())
        .expect("build chart");
    let series = chart.series_iter().next().expect("series").id();

    let free = chart.axis_at(AxisGroup::X, 0).expect("x0").key();
    chart.remove_axis(free).expect("x0 has no series");
    let held = chart.series(series).and_then(|s| s.x_axis()).expect("bound");
    assert_eq!(chart.axis(held).map(|axis| axis.index()), Some(0));

    chart.rebind_all_series().expect("selector 1 still resolves");
    let restored = Chart::from_config(chart.to_config())
        .and_then(|bootstrap| bootstrap.into_plot_ready())
        .expect("rebuild chart");

    let bound_index = |source: &Chart| {
        source
            .series_iter()
            .next()
            .and_then(|series| series.x_axis())
            .and_then(|key| source.axis(key))
            .map(|axis| axis.index())
    };
    assert_eq!(bound_index(&chart), Some(1));
    assert_eq!(bound_index(&restored), bound_index(&chart));
}

#[test]
fn persisted_options_track_axis_indices_after_removal() {
    let config = ChartConfig::default()
        .with_x_axis(AxisOptions::default().with_id("a"))
        .with_x_axis(AxisOptions::default().with_id("b"))
        .with_x_axis(AxisOptions::default().with_id("c"))
        .with_y_axis(AxisOptions::default());
    let mut chart = Chart::from_config(config).expect("build chart").chart;

    let b = chart.axis_by_id(AxisGroup::X, "b").expect("b").key();
    chart.remove_axis(b).expect("remove b");

    let persisted = &chart.options().x_axis;
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].id.as_deref(), Some("a"));
    assert_eq!(persisted[0].index, Some(0));
    assert_eq!(persisted[1].id.as_deref(), Some("c"));
    assert_eq!(persisted[1].index, Some(1));
}

#[test]
fn exported_config_rebuilds_equivalent_chart() {
    let config = ChartConfig::from_json_str(DUAL_AXIS_CONFIG).expect("parse config");
    let mut chart = Chart::from_config(config).expect("build chart").chart;
    chart
        .add_axis(AxisOptions::default().with_id("extra"), AxisGroup::X)
        .expect("extra x axis");
    chart
        .add_series(SeriesOptions::default().with_x_axis("extra"))
        .expect("bind to extra");

    let json = chart
        .to_config()
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let restored =
        Chart::from_config(ChartConfig::from_json_compat_str(&json).expect("parse contract"))
            .and_then(|bootstrap| bootstrap.into_plot_ready())
            .expect("rebuild chart");

    assert_eq!(restored.options(), chart.options());
    assert_eq!(restored.series_count(), chart.series_count());
    for (original, rebuilt) in chart.series_iter().zip(restored.series_iter()) {
        let index_of = |source: &Chart, group: AxisGroup, key: Option<AxisKey>| {
            key.and_then(|key| source.axis(key)).map(|axis| (group, axis.index()))
        };
        assert_eq!(
            index_of(&chart, AxisGroup::X, original.x_axis()),
            index_of(&restored, AxisGroup::X, rebuilt.x_axis())
        );
        assert_eq!(
            index_of(&chart, AxisGroup::Y, original.y_axis()),
            index_of(&restored, AxisGroup::Y, rebuilt.y_axis())
        );
    }
}
