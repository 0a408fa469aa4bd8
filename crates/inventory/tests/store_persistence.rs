//! End-to-end coverage of the inventory store against the JSON file
//! collaborator: fresh baseline, mutate-and-reload, and load faults.

use partstock_catalog::Catalog;
use partstock_core::Quantity;
use partstock_inventory::{InventoryStore, StoreError};
use partstock_storage::{JsonFileStore, StorageError};

fn translator_catalog() -> Catalog {
    Catalog::new([
        (
            "Vasco Translator M3".to_string(),
            vec![
                "Dolna Obudowa (White)".to_string(),
                "Górna Obudowa (Black)".to_string(),
            ],
        ),
        (
            "Vasco Translator V4".to_string(),
            vec!["Bateria (Model X)".to_string(), "Ekran (Model Y)".to_string()],
        ),
    ])
    .unwrap()
}

#[test]
fn counts_survive_a_process_restart() {
    partstock_observability::init();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    {
        let mut store =
            InventoryStore::load(translator_catalog(), JsonFileStore::new(&path)).unwrap();
        assert_eq!(store.state().pair_count(), 4);

        store
            .add_item("Vasco Translator M3", "Dolna Obudowa (White)", Quantity::new(5))
            .unwrap();
        store
            .add_item("Vasco Translator V4", "Ekran (Model Y)", Quantity::new(2))
            .unwrap();
        store
            .remove_item("Vasco Translator V4", "Ekran (Model Y)", Quantity::new(1))
            .unwrap();
    }

    // A new store over the same file sees exactly the persisted counts.
    let store = InventoryStore::load(translator_catalog(), JsonFileStore::new(&path)).unwrap();
    assert_eq!(
        store.quantity_of("Vasco Translator M3", "Dolna Obudowa (White)"),
        Some(Quantity::new(5))
    );
    assert_eq!(
        store.quantity_of("Vasco Translator V4", "Ekran (Model Y)"),
        Some(Quantity::new(1))
    );
    assert_eq!(
        store.quantity_of("Vasco Translator M3", "Górna Obudowa (Black)"),
        Some(Quantity::ZERO)
    );
}

#[test]
fn warehouse_scenario_end_to_end() {
    partstock_observability::init();

    let dir = tempfile::tempdir().unwrap();
    let store_file = JsonFileStore::new(dir.path().join("inventory.json"));
    let mut store = InventoryStore::load(translator_catalog(), store_file).unwrap();

    // What a selection control would be populated from.
    let categories: Vec<&str> = store.catalog().categories().collect();
    assert_eq!(categories, ["Vasco Translator M3", "Vasco Translator V4"]);

    store
        .add_item("Vasco Translator M3", "Dolna Obudowa (White)", Quantity::new(5))
        .unwrap();
    assert_eq!(
        store
            .quantity_of("Vasco Translator M3", "Dolna Obudowa (White)")
            .unwrap()
            .get(),
        5
    );

    let err = store
        .remove_item("Vasco Translator M3", "Dolna Obudowa (White)", Quantity::new(10))
        .unwrap_err();
    assert!(matches!(err, StoreError::Domain(_)));
    assert_eq!(
        store.quantity_of("Vasco Translator M3", "Dolna Obudowa (White)"),
        Some(Quantity::new(5))
    );

    let err = store
        .add_item("Vasco Translator M3", "Unknown Item", Quantity::new(1))
        .unwrap_err();
    assert!(matches!(err, StoreError::Domain(_)));

    assert!(
        store
            .snapshot()
            .contains("  Dolna Obudowa (White): 5\n")
    );
}

#[test]
fn malformed_persisted_data_aborts_construction() {
    partstock_observability::init();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, b"not a json document").unwrap();

    let err = InventoryStore::load(translator_catalog(), JsonFileStore::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Storage(StorageError::Load(_))
    ));
}
