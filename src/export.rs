use crate::error::Error;
use crate::inventory::InventoryEntry;

pub const FILE_NAME: &str = "store_inventory.csv";

/// Writes a shop as CSV, one row per item, each row carrying the store name.
pub fn to_csv(store_name: &str, entries: &[InventoryEntry]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["Store Name", "Item Name", "Item Price"])?;
    for entry in entries {
        writer.write_record([store_name, entry.name.as_str(), entry.price.as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|err| Error::Custom(format!("Failed to write inventory: {}", err.error())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let entries = vec![
            InventoryEntry {
                name: "Potion of Healing".to_owned(),
                price: "5 gold, 2 silver".to_owned(),
            },
            InventoryEntry {
                name: "Mule".to_owned(),
                price: "Price not available".to_owned(),
            },
        ];
        let csv = String::from_utf8(to_csv("The Rusty Anvil", &entries).unwrap()).unwrap();
        assert_eq!(
            csv,
            "Store Name,Item Name,Item Price\n\
             The Rusty Anvil,Potion of Healing,\"5 gold, 2 silver\"\n\
             The Rusty Anvil,Mule,Price not available\n"
        );
    }

    #[test]
    fn empty_shop_is_just_a_header() {
        let csv = to_csv("Quill's Wares", &[]).unwrap();
        assert_eq!(csv, b"Store Name,Item Name,Item Price\n");
    }
}
