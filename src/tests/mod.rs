
mod dex;

mod calculator;
mod team;



/// Test if rocket can be built around an empty dex
#[test]
fn test_rocket() {
    let _rocket = crate::build_rocket(fixtures::empty_dex()).expect("rocket should build");
    // no panic = success
}
