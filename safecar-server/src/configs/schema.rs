use crate::models::Table;
use crate::models::device::DeviceTable;
use crate::models::sensor_reading::SensorReadingTable;

/// Owns the DDL for every table and keeps it in dependency order, so
/// creation runs parents-first and disposal children-first.
pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(mut tables: Vec<Box<dyn Table>>) -> Self {
        Self::sort_tables(&mut tables);
        Self { tables }
    }

    fn sort_tables(tables: &mut Vec<Box<dyn Table>>) {
        let mut remaining = std::mem::take(tables);
        let mut sorted: Vec<Box<dyn Table>> = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let resolved: Vec<&str> = sorted.iter().map(|table| table.name()).collect();
            let index = remaining
                .iter()
                .position(|table| {
                    table.dependencies().iter().all(|dep| resolved.contains(dep))
                })
                .expect("Circular dependency detected or unresolved dependencies exist.");

            sorted.push(remaining.remove(index));
        }

        *tables = sorted;
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![Box::new(DeviceTable), Box::new(SensorReadingTable)])
    }
}
