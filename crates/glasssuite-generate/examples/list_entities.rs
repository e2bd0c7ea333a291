use glasssuite_core::EntityKind;

fn main() {
    for entity in EntityKind::ALL {
        println!(
            "{}  table={}  fields={}",
            entity.label(),
            entity.table_name(),
            entity.fields().len()
        );
    }
}
