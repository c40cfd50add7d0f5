use gridnet_core::settings::base::{
    read_base_json, read_base_tag, update_base, write_base_json, write_base_tag,
};
use gridnet_core::update::{TAG_FACING, TAG_RS};
use gridnet_core::{
    BaseSettings, ChannelColor, RedstoneMode, SettingsError, Side, UpdateMap, UpdateValue,
};
use tag::TagCompound;

fn edits(entries: &[(&str, UpdateValue)]) -> UpdateMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn side_is_fixed_at_construction() {
    let mut settings = BaseSettings::new(Side::North);
    let data = edits(&[
        (TAG_FACING, UpdateValue::Text("up".to_string())),
        (TAG_RS, UpdateValue::Text("PULSE".to_string())),
        ("color1", UpdateValue::Text("RED".to_string())),
    ]);
    update_base(&mut settings, &data).expect("update");

    assert_eq!(settings.side(), Side::North);
    assert_eq!(settings.facing_override, Some(Side::Up));
    assert_eq!(settings.redstone_mode, RedstoneMode::Pulse);
    assert_eq!(settings.colors[1], ChannelColor::Red);
    assert_eq!(settings.colors[0], ChannelColor::Off);
}

#[test]
fn facing_override_only_honored_in_advanced_mode() {
    let mut settings = BaseSettings::new(Side::North);
    settings.facing_override = Some(Side::Up);

    assert_eq!(settings.effective_facing(), Side::North);
    settings.advanced = true;
    assert_eq!(settings.effective_facing(), Side::Up);

    settings.facing_override = None;
    assert_eq!(settings.effective_facing(), Side::North);
}

#[test]
fn update_rejects_bad_enum_names_atomically() {
    let mut settings = BaseSettings::new(Side::North);
    let data = edits(&[
        (TAG_RS, UpdateValue::Text("PULSE".to_string())),
        ("color2", UpdateValue::Text("PURPLE".to_string())),
    ]);
    let result = update_base(&mut settings, &data);

    assert!(matches!(
        result,
        Err(SettingsError::InvalidEnumValue {
            field: "color2",
            ..
        })
    ));
    assert_eq!(settings.redstone_mode, RedstoneMode::Ignored);
}

#[test]
fn tag_round_trip_preserves_base_fields() {
    let mut settings = BaseSettings::new(Side::East);
    settings.facing_override = Some(Side::Down);
    settings.colors = [
        ChannelColor::Red,
        ChannelColor::Off,
        ChannelColor::Blue,
        ChannelColor::Yellow,
    ];
    settings.redstone_mode = RedstoneMode::On;
    settings.advanced = true;

    let mut tag = TagCompound::new();
    write_base_tag(&settings, &mut tag);

    let mut restored = BaseSettings::new(Side::East);
    read_base_tag(&mut restored, &tag).expect("read");
    assert_eq!(restored, settings);
}

#[test]
fn tag_read_without_facing_clears_override() {
    let settings = BaseSettings::new(Side::East);
    let mut tag = TagCompound::new();
    write_base_tag(&settings, &mut tag);
    assert!(!tag.contains("facing"));

    let mut restored = BaseSettings::new(Side::East);
    restored.facing_override = Some(Side::Up);
    read_base_tag(&mut restored, &tag).expect("read");
    assert_eq!(restored.facing_override, None);
}

#[test]
fn out_of_range_base_ordinals_are_corruption() {
    let mut tag = TagCompound::new();
    tag.set_byte("rs", 9);
    let mut settings = BaseSettings::new(Side::East);
    assert!(matches!(
        read_base_tag(&mut settings, &tag),
        Err(SettingsError::CorruptedState { field: "rs", .. })
    ));

    let mut tag = TagCompound::new();
    tag.set_byte("color3", -1);
    let mut settings = BaseSettings::new(Side::East);
    assert!(matches!(
        read_base_tag(&mut settings, &tag),
        Err(SettingsError::CorruptedState {
            field: "color3",
            ..
        })
    ));
}

#[test]
fn json_read_falls_back_on_unknown_names() {
    let mut settings = BaseSettings::new(Side::East);
    settings.colors[0] = ChannelColor::Red;
    settings.redstone_mode = RedstoneMode::Pulse;
    settings.advanced = true;

    let mut object = serde_json::Map::new();
    write_base_json(&settings, &mut object);
    object.insert("rs".to_string(), serde_json::Value::from("MAYBE"));
    object.insert("color0".to_string(), serde_json::Value::from("PURPLE"));

    let mut restored = BaseSettings::new(Side::East);
    read_base_json(&mut restored, &object);
    assert_eq!(restored.redstone_mode, RedstoneMode::Ignored);
    assert_eq!(restored.colors[0], ChannelColor::Off);
    assert!(restored.advanced);
}
