//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::Catalog;
use crate::domain::repositories::MenuRepository;
use crate::domain::usecases::NoParams;
use anyhow::Error;

pub struct GetMenu {
    repo: Box<dyn MenuRepository>,
}

impl GetMenu {
    pub fn new(repo: Box<dyn MenuRepository>) -> Self {
        Self { repo }
    }
}

impl super::UseCase<Catalog, NoParams> for GetMenu {
    fn call(&self, _params: NoParams) -> Result<Catalog, Error> {
        self.repo.get_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::super::UseCase;
    use super::*;
    use crate::domain::entities::MenuItem;
    use crate::domain::repositories::MockMenuRepository;
    use anyhow::anyhow;

    #[test]
    fn test_get_menu_ok() {
        // arrange
        let catalog = Catalog::new(vec![
            MenuItem::new(1, "Espresso", "$3.50", "☕"),
            MenuItem::new(6, "Chocolate Cake", "$5.99", "🍰"),
        ])
        .unwrap();
        let mut mock = MockMenuRepository::new();
        mock.expect_get_catalog()
            .returning(move || Ok(catalog.clone()));
        // act
        let usecase = GetMenu::new(Box::new(mock));
        let params = NoParams {};
        let result = usecase.call(params);
        // assert
        assert!(result.is_ok());
        let actual = result.unwrap();
        assert_eq!(actual.len(), 2);
        assert_eq!(actual.items()[0].name, "Espresso");
        assert_eq!(actual.items()[1].price, "$5.99");
    }

    #[test]
    fn test_get_menu_err() {
        // arrange
        let mut mock = MockMenuRepository::new();
        mock.expect_get_catalog().returning(|| Err(anyhow!("oh no")));
        // act
        let usecase = GetMenu::new(Box::new(mock));
        let params = NoParams {};
        let result = usecase.call(params);
        // assert
        assert!(result.is_err());
    }
}
