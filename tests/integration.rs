// SPDX-License-Identifier: MPL-2.0
use scrapbook::config::{self, Config};
use scrapbook::domain::diary::{Diary, DiaryId, Position, Sticker, Stroke, TextStyle};
use scrapbook::domain::diary::{HexColor, Rotation};
use scrapbook::i18n::fluent::I18n;
use scrapbook::share::ShareLink;
use scrapbook::storage::{key_for, DiaryStore, FsStore, KeyValueStore, Lookup};
use tempfile::tempdir;

fn decorated_diary(id: &str) -> Diary {
    let mut diary = Diary::with_id(DiaryId::parse(id).expect("valid id"));
    let page = &mut diary.pages[0];
    page.title = "Beach day".to_string();
    page.add_text_box(TextStyle::default());
    page.add_sticker(Sticker::new("🌈", Rotation::new(-8.0)));
    let mut stroke = Stroke::begin(Position::new(10.0, 10.0), HexColor::rgb(0, 0, 0), 3.0);
    stroke.extend_to(Position::new(40.0, 25.0));
    page.add_stroke(stroke);
    diary
}

#[test]
fn saved_diary_survives_a_new_store_instance() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let diary = decorated_diary("beach");

    DiaryStore::new(FsStore::new(dir.path()))
        .save(&diary)
        .expect("save");

    let reopened = DiaryStore::new(FsStore::new(dir.path()));
    match reopened.lookup(&diary.id) {
        Lookup::Found(loaded) => assert_eq!(loaded, diary),
        other => panic!("expected the diary back, got {other:?}"),
    }
}

#[test]
fn records_are_stored_under_the_prefixed_key() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let diary = decorated_diary("keyed");
    DiaryStore::new(FsStore::new(dir.path()))
        .save(&diary)
        .expect("save");

    let raw = FsStore::new(dir.path());
    assert_eq!(key_for(&diary.id), "scrapbook-keyed");
    assert!(raw.get("scrapbook-keyed").expect("read").is_some());
}

#[test]
fn listing_and_deleting_diaries() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = DiaryStore::new(FsStore::new(dir.path()));
    store.save(&decorated_diary("one")).expect("save");
    store.save(&decorated_diary("two")).expect("save");

    let ids: Vec<String> = store
        .list()
        .expect("list")
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["one".to_string(), "two".to_string()]);

    let one = DiaryId::parse("one").expect("valid id");
    assert!(store.delete(&one).expect("delete"));
    assert!(matches!(store.lookup(&one), Lookup::NotFound));
}

#[test]
fn share_link_points_back_at_the_saved_diary() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = DiaryStore::new(FsStore::new(dir.path()));
    let diary = decorated_diary("trip2024");
    store.save(&diary).expect("save");

    let link = ShareLink::new(diary.id.clone()).to_string();
    assert_eq!(link, "scrapbook://open?diary=trip2024");

    let parsed = ShareLink::parse(&link).expect("valid link");
    assert!(matches!(store.lookup(parsed.diary_id()), Lookup::Found(_)));
}

#[test]
fn link_to_an_unknown_diary_is_not_found() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = DiaryStore::new(FsStore::new(dir.path()));
    let link = ShareLink::parse("scrapbook://open?diary=ghost").expect("valid link");
    assert!(matches!(store.lookup(link.diary_id()), Lookup::NotFound));
}

#[test]
fn language_follows_the_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let english = I18n::new(Some("en-US".to_string()), None, &loaded);
    assert_eq!(english.current_locale().to_string(), "en-US");
}
