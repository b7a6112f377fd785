use lyricrails::game::judge::{Judgment, JudgeWindows};
use lyricrails::game::score::{combo_multiplier, event_score};

#[test]
fn standard_windows_classify_inclusively() {
    let windows = JudgeWindows::standard();

    assert_eq!(windows.classify(0), Some(Judgment::Perfect));
    assert_eq!(windows.classify(50), Some(Judgment::Perfect));
    assert_eq!(windows.classify(-50), Some(Judgment::Perfect));
    assert_eq!(windows.classify(100), Some(Judgment::Great));
    assert_eq!(windows.classify(-100), Some(Judgment::Great));
    assert_eq!(windows.classify(150), Some(Judgment::Good));
    assert_eq!(windows.classify(-150), Some(Judgment::Good));
    assert_eq!(windows.classify(151), None);
}

#[test]
fn release_windows_scale_by_half_again() {
    let release = JudgeWindows::standard().for_release();
    assert_eq!(release.classify(75), Some(Judgment::Perfect));
    assert_eq!(release.classify(150), Some(Judgment::Great));
    assert_eq!(release.classify(225), Some(Judgment::Good));
    assert_eq!(release.classify_or_miss(-226), Judgment::Miss);
}

#[test]
fn multiplier_ramp_reaches_double_at_110() {
    assert_eq!(combo_multiplier(9), 1.0);
    assert_eq!(combo_multiplier(10), 1.0);
    assert_eq!(combo_multiplier(110), 2.0);
    assert_eq!(combo_multiplier(1000), 2.0);
}

#[test]
fn event_scores_floor_the_product() {
    assert_eq!(event_score(1000, 0), 1000);
    assert_eq!(event_score(700, 15), 735);
    assert_eq!(event_score(300, 110), 600);
    assert_eq!(event_score(0, 110), 0);
}
