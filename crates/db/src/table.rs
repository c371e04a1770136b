use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum KvStore {
    Table,
    Key,
    Value,
}
