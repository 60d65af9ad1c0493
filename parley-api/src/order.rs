#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OrderType {
    Asc,
    #[default]
    Desc,
}

impl OrderType {
    pub fn reversed(self) -> OrderType {
        match self {
            OrderType::Asc => OrderType::Desc,
            OrderType::Desc => OrderType::Asc,
        }
    }
}
