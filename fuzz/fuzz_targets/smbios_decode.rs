#![no_main]

use inventory::fixtures::{MapConfigStore, MapQuery, StaticTable};
use inventory::IdentityResolver;
use libfuzzer_sys::fuzz_target;
use smbios_table::{decode_structures, RawSmbiosData};

fuzz_target!(|data: &[u8]| {
    let _ = decode_structures(data);
    if let Ok(raw) = RawSmbiosData::parse(data) {
        for structure in raw.structures() {
            for field in 0..32 {
                let _ = structure.string_at(field);
            }
        }
    }

    let config = MapConfigStore::default();
    let query = MapQuery::default();
    let _ = IdentityResolver::new(&config, &query).collect(&StaticTable(data.to_vec()));
});
