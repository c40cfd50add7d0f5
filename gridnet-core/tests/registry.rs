use gridnet_core::update::TAG_RATE;
use gridnet_core::{
    load_connectors, ChannelTypeRegistry, ConnectorInfo, ConnectorSettings, ConsumerId,
    EnergyChannelType, SettingsError, Side, SidedConsumer, StoredConnector, UpdateValue,
};
use tag::TagCompound;

fn consumer(id: u64, side: Side) -> SidedConsumer {
    SidedConsumer {
        consumer: ConsumerId(id),
        side,
    }
}

fn registry() -> ChannelTypeRegistry {
    let mut registry = ChannelTypeRegistry::new();
    registry.register(Box::new(EnergyChannelType));
    registry
}

#[test]
fn registry_resolves_registered_types_only() {
    let registry = registry();
    assert!(registry.get("energy").is_some());
    assert!(registry.get("fluid").is_none());

    let result = registry.create_connector("fluid", Side::North);
    assert!(matches!(
        result,
        Err(SettingsError::UnknownChannelType(name)) if name == "fluid"
    ));
}

#[test]
fn connector_info_delegates_tag_round_trip() {
    let energy = EnergyChannelType;
    let mut info = ConnectorInfo::new(&energy, consumer(1, Side::North), true);
    assert_eq!(info.type_name(), "energy");
    assert!(info.is_advanced());
    assert_eq!(info.id().consumer, ConsumerId(1));

    let data: gridnet_core::UpdateMap = [(TAG_RATE.to_string(), UpdateValue::Int(120))]
        .into_iter()
        .collect();
    info.settings_mut().update(&data).expect("update");

    let mut tag = TagCompound::new();
    info.write_to_tag(&mut tag);
    assert_eq!(tag.get_int("rate"), Some(120));

    let mut restored = ConnectorInfo::new(&energy, consumer(1, Side::North), true);
    restored.read_from_tag(&tag).expect("read");
    let mut check = TagCompound::new();
    restored.write_to_tag(&mut check);
    assert_eq!(check, tag);
}

#[test]
fn corrupt_connector_does_not_abort_siblings() {
    let registry = registry();

    let mut good_tag = TagCompound::new();
    good_tag.set_byte("itemMode", 1);
    good_tag.set_int("priority", 4);

    let mut corrupt_tag = TagCompound::new();
    corrupt_tag.set_byte("itemMode", 7);

    let stored = vec![
        StoredConnector {
            type_name: "energy".to_string(),
            id: consumer(1, Side::North),
            advanced: false,
            tag: good_tag.clone(),
        },
        StoredConnector {
            type_name: "energy".to_string(),
            id: consumer(2, Side::South),
            advanced: false,
            tag: corrupt_tag,
        },
        StoredConnector {
            type_name: "energy".to_string(),
            id: consumer(3, Side::Up),
            advanced: true,
            tag: good_tag,
        },
    ];

    let loaded = load_connectors(&registry, &stored);
    let ids: Vec<u64> = loaded.iter().map(|info| info.id().consumer.0).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn unknown_channel_type_is_skipped_on_load() {
    let registry = registry();
    let stored = vec![StoredConnector {
        type_name: "fluid".to_string(),
        id: consumer(9, Side::West),
        advanced: false,
        tag: TagCompound::new(),
    }];
    assert!(load_connectors(&registry, &stored).is_empty());
}
