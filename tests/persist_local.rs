use std::io::{self, Read, Write};

use collector::{
    fs::{LocalFs, Store},
    Collector, CollectorError, CollectorOption, Decode, Encode, SaveMode,
};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: u32,
    name: String,
    balance: Option<i64>,
}

impl Encode for Customer {
    type Error = io::Error;

    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write,
    {
        self.id.encode(writer)?;
        self.name.encode(writer)?;
        self.balance
            .encode(writer)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    }

    fn size(&self) -> usize {
        self.id.size() + self.name.size() + self.balance.size()
    }
}

impl Decode for Customer {
    type Error = io::Error;

    fn decode<R>(reader: &mut R) -> Result<Self, Self::Error>
    where
        R: Read,
    {
        Ok(Customer {
            id: u32::decode(reader)?,
            name: String::decode(reader)?,
            balance: Option::<i64>::decode(reader)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?,
        })
    }
}

fn customer(id: u32, name: &str, balance: Option<i64>) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        balance,
    }
}

#[test]
fn round_trip_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalFs::new(temp_dir.path());

    let mut customers = Collector::new();
    customers.add(customer(1, "ada", Some(100)));
    customers.add(customer(2, "grace", None));
    customers.add(customer(3, "linus", Some(-5)));

    assert_eq!(customers.save(&store, "customers").unwrap(), 3);
    let expected_size = 8 + customers.iter().map(|(_, c, _)| c.size()).sum::<usize>();
    assert_eq!(
        std::fs::metadata(store.path("customers")).unwrap().len() as usize,
        expected_size
    );

    let mut loaded = Collector::<Customer>::new();
    assert_eq!(loaded.load(&store, "customers").unwrap(), 3);
    for index in 0..3 {
        assert_eq!(loaded.get(index), customers.get(index));
        assert!(!loaded.is_removed(index));
    }
}

#[test]
fn removed_customers_are_compacted() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalFs::new(temp_dir.path());

    let mut customers = Collector::new();
    let a = customers.add(customer(1, "a", None));
    let b = customers.add(customer(2, "b", None));
    let c = customers.add(customer(3, "c", None));
    customers.remove(b);
    customers.update(c, customer(30, "c2", Some(7)));

    customers.save(&store, "customers").unwrap();

    let mut loaded = Collector::<Customer>::new();
    loaded.load(&store, "customers").unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get(0), customers.get(a));
    assert_eq!(loaded.get(1), &customer(30, "c2", Some(7)));
}

#[test]
fn legacy_file_is_byte_compatible() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalFs::new(temp_dir.path());

    let mut legacy = Collector::with_option(CollectorOption::default().save_mode(SaveMode::Legacy));
    legacy.extend([10u64, 20, 30]);
    legacy.remove(0);
    assert_eq!(legacy.save(&store, "legacy").unwrap(), 1);

    let mut expected = Vec::new();
    expected.extend_from_slice(&2u64.to_le_bytes());
    expected.extend_from_slice(&20u64.to_le_bytes());
    assert_eq!(std::fs::read(store.path("legacy")).unwrap(), expected);
}

#[test]
fn load_missing_file_preserves_contents() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalFs::new(temp_dir.path());

    let mut values: Collector<u16> = [1, 2, 3].into_iter().collect();
    let err = values.load(&store, "absent").unwrap_err();
    assert!(matches!(err, CollectorError::Io(_)));
    assert_eq!(values.len(), 3);
}

#[test]
fn save_overwrites_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalFs::new(temp_dir.path());

    let long: Collector<String> = ["x".repeat(64), "y".repeat(64)].into_iter().collect();
    long.save(&store, "strings").unwrap();

    let short: Collector<String> = ["z".to_string()].into_iter().collect();
    short.save(&store, "strings").unwrap();

    let mut loaded = Collector::<String>::new();
    assert_eq!(loaded.load(&store, "strings").unwrap(), 1);
    assert_eq!(loaded[0], "z");

    let mut reader = store.open_read("strings").unwrap();
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 8 + 4 + 1);
}
