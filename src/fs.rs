use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::warehouse::Warehouse;
use crate::LoadWarehouse;

impl<P: AsRef<Path>> LoadWarehouse for P {
    fn load_warehouse(&self) -> Result<Warehouse, Box<dyn Error>> {
        let mut file = File::open(self)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let warehouse: Warehouse = contents.parse()?;
        Ok(warehouse)
    }
}
