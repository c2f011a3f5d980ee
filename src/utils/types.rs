pub type Pool = deadpool_diesel::postgres::Pool;
