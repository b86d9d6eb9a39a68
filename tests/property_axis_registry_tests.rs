use chart_axes::api::Chart;
use chart_axes::core::{AxisGroup, AxisOptions, AxisSelector, SeriesOptions};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum RegistryOp {
    Add { is_x: bool },
    Remove { is_x: bool, slot: usize },
}

fn registry_op() -> impl Strategy<Value = RegistryOp> {
    prop_oneof![
        any::<bool>().prop_map(|is_x| RegistryOp::Add { is_x }),
        (any::<bool>(), 0usize..8).prop_map(|(is_x, slot)| RegistryOp::Remove { is_x, slot }),
    ]
}

fn assert_contiguous(chart: &Chart, group: AxisGroup) -> Result<(), TestCaseError> {
    let persisted = chart.axis_options(group);
    prop_assert_eq!(persisted.len(), chart.axis_count(group));
    for (position, axis) in chart.axes_in_group(group).enumerate() {
        prop_assert_eq!(axis.index(), position);
        prop_assert_eq!(axis.options().index, Some(position));
        prop_assert_eq!(persisted[position].index, Some(position));
    }
    Ok(())
}

proptest! {
    #[test]
    fn indices_stay_contiguous_after_any_add_remove_sequence(
        ops in prop::collection::vec(registry_op(), 0..64)
    ) {
        let mut chart = Chart::new();
        for op in ops {
            match op {
                RegistryOp::Add { is_x } => {
                    let group = AxisGroup::from_is_x(is_x);
                    let before = chart.axis_count(group);
                    let key = chart.add_axis_is_x(AxisOptions::default(), is_x).expect("add axis");
                    prop_assert_eq!(chart.axis_count(group), before + 1);
                    prop_assert_eq!(chart.axis_keys(group).last().copied(), Some(key));
                }
                RegistryOp::Remove { is_x, slot } => {
                    let group = AxisGroup::from_is_x(is_x);
                    let keys = chart.axis_keys(group).to_vec();
                    if keys.is_empty() {
                        continue;
                    }
                    let key = keys[slot % keys.len()];
                    chart.remove_axis(key).expect("axes without series are removable");
                    prop_assert_eq!(chart.axis_count(group), keys.len() - 1);
                    prop_assert!(chart.axis(key).is_none());
                }
            }
            assert_contiguous(&chart, AxisGroup::X)?;
            assert_contiguous(&chart, AxisGroup::Y)?;
        }
    }

    #[test]
    fn binding_is_idempotent_for_any_in_range_selector(
        x_axes in 1usize..6,
        y_axes in 1usize..6,
        x_pick in 0usize..6,
        y_pick in 0usize..6,
        repeats in 1usize..4
    ) {
        let mut chart = Chart::new();
        for _ in 0..x_axes {
            chart.add_axis(AxisOptions::default(), AxisGroup::X).expect("x axis");
        }
        for i in 0..y_axes {
            chart
                .add_axis(AxisOptions::default().with_id(format!("y{i}")), AxisGroup::Y)
                .expect("y axis");
        }
        let x_index = x_pick % x_axes;
        let y_id = format!("y{}", y_pick % y_axes);
        let series = chart
            .add_series(
                SeriesOptions::default()
                    .with_x_axis(AxisSelector::ByIndex(x_index))
                    .with_y_axis(y_id.as_str()),
            )
            .expect("bind");

        for _ in 0..repeats {
            chart.bind_axes(series).expect("rebind");
        }

        let bound = chart.series(series).expect("series");
        let x_axis = chart.axis(bound.x_axis().expect("x bound")).expect("x axis");
        let y_axis = chart.axis(bound.y_axis().expect("y bound")).expect("y axis");
        prop_assert_eq!(x_axis.index(), x_index);
        prop_assert_eq!(y_axis.id(), Some(y_id.as_str()));
        let registrations: usize = chart.axes().map(|axis| axis.series().len()).sum();
        prop_assert_eq!(registrations, 2);
    }
}
