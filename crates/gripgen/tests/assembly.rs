//! End-to-end generation with the builtin part geometry.

use gripgen::{
    BoxSpec, BuiltinLoader, Generator, GridSpec, PlacementRole, Scene, GRIPPER_GROUP,
};

fn expected_counts(grid: &GridSpec) -> [(PlacementRole, usize); 6] {
    let (c, r) = (grid.columns as usize, grid.rows as usize);
    [
        (PlacementRole::Joint, c * r),
        (PlacementRole::SuctionCup, c * r),
        (PlacementRole::HorizontalConnector, (c - 1) * r),
        (PlacementRole::VerticalConnector, c * (r - 1)),
        (PlacementRole::Plate, 1),
        (PlacementRole::Stick, usize::from(r % 2 == 0)),
    ]
}

#[test]
fn instance_counts_match_grid_for_many_boxes() {
    let generator = Generator::from_loader(&BuiltinLoader).unwrap();
    let specs = [
        BoxSpec::new(300.0, 100.0, 4, 3.0),
        BoxSpec::new(100.0, 500.0, 1, 1.0),
        BoxSpec::new(800.0, 1200.0, 3, 6.0),
        BoxSpec::new(600.0, 2000.0, 6, 9.0),
        BoxSpec::new(275.0, 40.0, 2, 0.5),
    ];

    for spec in &specs {
        let grid = generator.layout(spec).unwrap();
        let mut scene = Scene::new("preview");
        generator.run(spec, &mut scene).unwrap();
        let group = scene.group(GRIPPER_GROUP).unwrap();
        for (role, expected) in expected_counts(&grid) {
            assert_eq!(group.count(role), expected, "{role:?} for {spec:?}");
        }
    }
}

#[test]
fn frame_sits_in_positive_quadrant() {
    let generator = Generator::from_loader(&BuiltinLoader).unwrap();
    let mut scene = Scene::new("preview");
    generator
        .run(&BoxSpec::new(300.0, 100.0, 4, 3.0), &mut scene)
        .unwrap();
    let (min, max) = scene.group(GRIPPER_GROUP).unwrap().bounds().unwrap();
    // joints span x in [0, 4], y in [0, 5.25] before part extents
    assert!(min[0] > -0.5 && min[1] > -0.5, "min {min:?}");
    assert!(max[0] >= 4.0 && max[1] >= 5.25, "max {max:?}");
}

#[test]
fn plan_serializes_to_json() {
    let generator = Generator::from_loader(&BuiltinLoader).unwrap();
    let (grid, placements) = generator.plan(&BoxSpec::new(300.0, 100.0, 4, 3.0)).unwrap();
    assert_eq!(grid.columns, 3);
    let json = serde_json::to_string(&placements).unwrap();
    assert!(json.contains(r#""role":"horizontal_connector""#));
    assert!(json.contains(r#""role":"stick""#));
}
