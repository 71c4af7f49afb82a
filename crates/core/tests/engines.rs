use balatree_core::{
    BossBlinds, BossRule, Card, Consumable, ConsumableInfo, ContentConfig, Deck, DeckRule, Effect,
    EffectKind, Event, EventBus, GameLedger, PlanetCard, PlanetEffect, Rarity, Source,
    SpectralCard, Suit, TarotBuff, TarotCard, Voucher, VoucherEffect, BLIND_ESCALATION_STEP,
};

fn info(name: &str) -> ConsumableInfo {
    ConsumableInfo {
        name: name.to_string(),
        cost: 3,
        description: String::new(),
        rarity: Rarity::Common,
    }
}

#[test]
fn increase_chips_adds_magnitude() {
    let mut ledger = GameLedger {
        chips: 3,
        ..GameLedger::new()
    };
    let mut events = EventBus::default();
    Effect::from_tag("increase_chips", Some(7.0)).apply(&mut ledger, &mut events);
    assert_eq!(ledger.chips, 10);
}

#[test]
fn increase_chips_without_magnitude_is_noop() {
    let mut ledger = GameLedger::new();
    let mut events = EventBus::default();
    Effect::new(EffectKind::IncreaseChips(None)).apply(&mut ledger, &mut events);
    assert_eq!(ledger, GameLedger::new());
    assert_eq!(events.len(), 1);
}

#[test]
fn unknown_effect_leaves_chips() {
    let mut ledger = GameLedger {
        chips: 3,
        ..GameLedger::new()
    };
    let mut events = EventBus::default();
    Effect::from_tag("summon_dragon", Some(99.0)).apply(&mut ledger, &mut events);
    assert_eq!(ledger.chips, 3);
    let recorded: Vec<Event> = events.drain().collect();
    assert_eq!(
        recorded,
        vec![Event::UnknownTag {
            source: Source::Effect,
            tag: "summon_dragon".to_string(),
        }]
    );
    assert!(events.is_empty());
}

#[test]
fn double_bet_sets_flag() {
    let mut ledger = GameLedger::new();
    Effect::from_tag("double_bet", Some(4.0)).apply(&mut ledger, &mut EventBus::default());
    assert!(ledger.double_bet);
    assert_eq!(ledger.chips, 0);
}

#[test]
fn card_applies_effects_in_order() {
    let card = Card::new("Lucky Seven", Suit::Diamonds, 7).with_effects(vec![
        Effect::from_tag("increase_chips", Some(5.0)),
        Effect::from_tag("double_bet", None),
        Effect::from_tag("increase_chips", Some(2.0)),
    ]);
    let mut ledger = GameLedger::new();
    let mut events = EventBus::default();
    card.apply_effects(&mut ledger, &mut events);
    assert_eq!(ledger.chips, 7);
    assert!(ledger.double_bet);
    assert_eq!(events.len(), 3);
}

#[test]
fn deck_rules_apply_additively() {
    let deck = Deck {
        name: "Red Deck".to_string(),
        description: "extra everything".to_string(),
        num_cards: 52,
        joker_slots: 5,
        consumable_slots: 2,
        special_rules: vec![
            DeckRule::from_tag("bonus_chips", 20.0),
            DeckRule::from_tag("extra_multiplier", 0.5),
            DeckRule::from_tag("reroll_bonus", 2.0),
            DeckRule::from_tag("Bonus_Chips", 100.0),
        ],
    };
    let mut ledger = GameLedger::new();
    let mut events = EventBus::default();
    deck.apply_special_rules(&mut ledger, &mut events);
    assert_eq!(ledger.chips, 20);
    assert_eq!(ledger.base_multiplier, 1.5);
    assert_eq!(ledger.multiplier, 1.0);
    assert_eq!(ledger.rerolls_remaining, 2);
    assert_eq!(events.len(), 4);
    assert!(matches!(
        events.iter().last(),
        Some(Event::UnknownTag { tag, .. }) if tag == "Bonus_Chips"
    ));
}

macro_rules! voucher_case {
    ($name:ident, $tag:expr, $value:expr, $check:expr) => {
        #[test]
        fn $name() {
            let voucher = Voucher {
                name: "Test Voucher".to_string(),
                cost: 10,
                description: String::new(),
                rarity: Rarity::Rare,
                effect: VoucherEffect::from_tag($tag, $value),
            };
            let mut ledger = GameLedger::new();
            voucher.apply_effect(&mut ledger, &mut EventBus::default());
            let check: fn(&GameLedger) -> bool = $check;
            assert!(check(&ledger), "{:?}", ledger);
        }
    };
}

voucher_case!(voucher_discount, "Discount", 25.0, |l| l.shop_discount == 25);
voucher_case!(voucher_rerolls, "Reroll Bonus", 2.0, |l| l.rerolls_remaining == 2);
voucher_case!(voucher_slots, "Shop Slots", 1.0, |l| l.shop_slots == 3);
voucher_case!(voucher_chips, "Bonus Chips", 15.0, |l| l.chips == 15);
voucher_case!(voucher_unknown, "Free Lunch", 15.0, |l| *l == GameLedger::new());

#[test]
fn tarot_buffs_named_fields() {
    let mut ledger = GameLedger::new();
    let mut events = EventBus::default();
    for buff in [
        TarotBuff::from_tag("Multiplier", 2.0),
        TarotBuff::from_tag("Chips", 30.0),
        TarotBuff::from_tag("Hand Size", 1.0),
    ] {
        let card = TarotCard {
            info: info("The Magician"),
            buff,
        };
        card.apply_effect(&mut ledger, &mut events);
    }
    assert_eq!(ledger.multiplier, 3.0);
    assert_eq!(ledger.chips, 30);
    assert_eq!(ledger.hand_size, 9);
}

#[test]
fn tarot_unmatched_buff_changes_nothing() {
    let card = TarotCard {
        info: info("The Fool"),
        buff: TarotBuff::from_tag("multiplier", 2.0),
    };
    let mut ledger = GameLedger::new();
    let mut events = EventBus::default();
    card.apply_effect(&mut ledger, &mut events);
    assert_eq!(ledger, GameLedger::new());
    assert_eq!(events.len(), 1);
    assert_eq!(card.name(), "The Fool");
}

#[test]
fn planet_double_chips_saturates() {
    let mut ledger = GameLedger {
        chips: i64::MAX / 2 + 1,
        ..GameLedger::new()
    };
    let saturn = PlanetCard {
        info: info("Saturn"),
        special_effect: PlanetEffect::DoubleChips,
    };
    saturn.apply_effect(&mut ledger, &mut EventBus::default());
    assert_eq!(ledger.chips, i64::MAX);
}

#[test]
fn chip_bonuses_saturate() {
    let mut ledger = GameLedger {
        chips: i64::MAX - 3,
        ..GameLedger::new()
    };
    let mut events = EventBus::default();
    Effect::from_tag("increase_chips", Some(10.0)).apply(&mut ledger, &mut events);
    assert_eq!(ledger.chips, i64::MAX);
    TarotCard {
        info: info("The Hermit"),
        buff: TarotBuff::Chips(1),
    }
    .apply_effect(&mut ledger, &mut events);
    assert_eq!(ledger.chips, i64::MAX);
}

#[test]
fn fractional_magnitudes_round_half_away_from_zero() {
    assert_eq!(DeckRule::from_tag("bonus_chips", 2.5), DeckRule::BonusChips(3));
    assert_eq!(DeckRule::from_tag("bonus_chips", -2.5), DeckRule::BonusChips(-3));
    assert_eq!(
        VoucherEffect::from_tag("Discount", 12.4),
        VoucherEffect::Discount(12)
    );
    assert_eq!(TarotBuff::from_tag("Chips", 0.5), TarotBuff::Chips(1));
    assert_eq!(
        EffectKind::from_tag("increase_chips", Some(1.5)),
        EffectKind::IncreaseChips(Some(2))
    );
}

#[test]
fn planet_doubles() {
    let mut ledger = GameLedger {
        chips: 12,
        multiplier: 1.5,
        ..GameLedger::new()
    };
    let mut events = EventBus::default();
    let mars = PlanetCard {
        info: info("Mars"),
        special_effect: PlanetEffect::from_tag("Double Multiplier"),
    };
    let venus = PlanetCard {
        info: info("Venus"),
        special_effect: PlanetEffect::from_tag("Double Chips"),
    };
    let pluto = PlanetCard {
        info: info("Pluto"),
        special_effect: PlanetEffect::from_tag("Triple Everything"),
    };
    mars.apply_effect(&mut ledger, &mut events);
    venus.apply_effect(&mut ledger, &mut events);
    pluto.apply_effect(&mut ledger, &mut events);
    assert_eq!(ledger.multiplier, 3.0);
    assert_eq!(ledger.chips, 24);
    assert_eq!(events.len(), 2);
}

#[test]
fn spectral_runs_callback_and_records_duration() {
    let card = SpectralCard::new(info("Ectoplasm"), 3, |ledger: &mut GameLedger| {
        ledger.hand_size -= 1;
        ledger.chips += 50;
    });
    let consumables: Vec<Box<dyn Consumable>> = vec![Box::new(card)];
    let mut ledger = GameLedger::new();
    let mut events = EventBus::default();
    for item in &consumables {
        item.apply_effect(&mut ledger, &mut events);
    }
    assert_eq!(ledger.hand_size, 7);
    assert_eq!(ledger.chips, 50);
    assert_eq!(
        events.drain().collect::<Vec<_>>(),
        vec![Event::SpectralApplied {
            name: "Ectoplasm".to_string(),
            duration: 3,
        }]
    );
}

#[test]
fn boss_escalates_after_threshold() {
    let mut boss = BossBlinds::new(10, 20, 2, 100, 3, Vec::new());
    let mut events = EventBus::default();
    boss.activate(&mut events);
    for _ in 0..5 {
        assert!(!boss.tick(&mut events));
        assert_eq!(boss.current_blinds(), (10, 20));
    }
    assert!(boss.tick(&mut events));
    assert_eq!(
        boss.current_blinds(),
        (10 + BLIND_ESCALATION_STEP, 20 + BLIND_ESCALATION_STEP)
    );
    assert_eq!(boss.round_counter(), 0);
}

#[test]
fn boss_blinds_clamp_at_cap() {
    let mut boss = BossBlinds::new(10, 22, 1, 25, 1, Vec::new());
    let mut events = EventBus::default();
    boss.activate(&mut events);
    boss.tick(&mut events);
    assert_eq!(boss.current_blinds(), (15, 25));
    boss.tick(&mut events);
    boss.tick(&mut events);
    assert_eq!(boss.current_blinds(), (25, 25));
}

#[test]
fn boss_inactive_ticks_do_nothing() {
    let mut boss = BossBlinds::new(10, 20, 1, 100, 1, Vec::new());
    let mut events = EventBus::default();
    for _ in 0..50 {
        assert!(!boss.tick(&mut events));
    }
    assert_eq!(boss.current_blinds(), (10, 20));
    assert_eq!(boss.round_counter(), 0);
    assert!(events.is_empty());

    boss.activate(&mut events);
    boss.deactivate(&mut events);
    boss.deactivate(&mut events);
    assert!(!boss.is_active());
    assert!(!boss.tick(&mut events));
    assert_eq!(events.len(), 3);
}

#[test]
fn boss_rules_apply_to_ledger() {
    let boss = BossBlinds::new(
        10,
        20,
        1,
        100,
        1,
        vec![
            BossRule::from_tag("bonus_chips", 25.0),
            BossRule::from_tag("double_bet", 0.0),
            BossRule::from_tag("no_discards", 1.0),
        ],
    );
    let mut ledger = GameLedger::new();
    let mut events = EventBus::default();
    boss.apply_boss_rules(&mut ledger, &mut events);
    assert_eq!(ledger.chips, 25);
    assert!(ledger.double_bet);
    assert_eq!(events.len(), 3);
    assert!(!boss.is_active());
}

#[test]
fn content_config_builds_typed_rules() {
    let text = r#"{
        "cards": [
            {"name": "Ace", "suit": "Spades", "chip_value": 11,
             "effects": [{"tag": "increase_chips", "value": 4}]}
        ],
        "decks": [
            {"name": "Blue Deck", "num_cards": 52, "joker_slots": 5, "consumable_slots": 2,
             "special_rules": [{"tag": "reroll_bonus", "value": 1}, {"tag": "mystery", "value": 9}]}
        ],
        "vouchers": [
            {"name": "Clearance Sale", "cost": 10, "rarity": "Common",
             "effect_type": "Discount", "effect_value": 25}
        ]
    }"#;
    let config = ContentConfig::from_json(text).expect("config");
    let deck = config.deck("Blue Deck").expect("deck");
    assert_eq!(
        deck.special_rules,
        vec![
            DeckRule::RerollBonus(1),
            DeckRule::Unknown {
                tag: "mystery".to_string(),
                value: 9.0,
            },
        ]
    );
    let voucher = config.voucher("Clearance Sale").expect("voucher");
    assert_eq!(voucher.effect, VoucherEffect::Discount(25));
    let catalog = config.card_catalog();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].effects, vec![Effect::new(EffectKind::IncreaseChips(Some(4)))]);
    assert!(config.boss_blinds.is_none());
    assert!(config.deck("Red Deck").is_none());
}
