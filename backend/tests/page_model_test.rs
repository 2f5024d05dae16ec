/// Page model behaviour through the async service: validations, tag statics,
/// similarity, the route virtual and the slug hook
use wiki::application::{PageError, PageService, SimilarTo};
use wiki::domain::{
    aggregates::{Page, PageDraft},
    base::Entity,
    validation::PageField,
    value_objects::Tag,
};
use wiki::infrastructure::persistence::InMemoryPageRepository;

type Service = PageService<InMemoryPageRepository>;

fn draft(title: &str, content: &str, labels: &[&str]) -> PageDraft {
    PageDraft::new(title, content).with_tags(Tag::list(labels.iter().copied()).unwrap())
}

fn tag(label: &str) -> Tag {
    Tag::new(label).unwrap()
}

fn titles(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(Page::title).collect()
}

/// Three pages created concurrently; every create has finished on return
async fn seed_three(service: &Service) -> (Page, Page, Page) {
    tokio::try_join!(
        service.create(draft("foo", "bar", &["foo", "bar"])),
        service.create(draft("dogs", "odie", &["dog", "animal"])),
        service.create(draft("cats", "meow", &["cat", "animal"])),
    )
    .unwrap()
}

async fn teardown(service: &Service) {
    service.remove_all().await.unwrap();
    assert!(service.find_all().await.unwrap().is_empty());
}

mod validations {
    use super::*;

    #[tokio::test]
    async fn errors_without_title() {
        let service = Service::new(InMemoryPageRepository::new());
        let err = service.validate(&PageDraft::default()).await.unwrap_err();
        assert!(err.validation_errors().unwrap().has(PageField::Title));
    }

    #[tokio::test]
    async fn errors_without_content() {
        let service = Service::new(InMemoryPageRepository::new());
        let err = service.validate(&PageDraft::default()).await.unwrap_err();
        assert!(err.validation_errors().unwrap().has(PageField::Content));
    }

    #[tokio::test]
    async fn whitespace_only_fields_are_missing() {
        let service = Service::new(InMemoryPageRepository::new());
        let err = service
            .create(PageDraft::new("   ", "\n\t"))
            .await
            .unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn complete_draft_is_valid() {
        let service = Service::new(InMemoryPageRepository::new());
        assert!(service.validate(&PageDraft::new("foo", "bar")).await.is_ok());
    }
}

mod statics {
    use super::*;

    async fn fixture() -> Service {
        let service = Service::new(InMemoryPageRepository::new());
        service.create(draft("foo", "bar", &["foo", "bar"])).await.unwrap();
        service
    }

    #[tokio::test]
    async fn find_by_tag_gets_pages_with_the_search_tag() {
        let service = fixture().await;
        let pages = service.find_by_tag(&tag("foo")).await.unwrap();
        assert_eq!(pages.len(), 1);
        teardown(&service).await;
    }

    #[tokio::test]
    async fn find_by_tag_does_not_get_pages_without_the_search_tag() {
        let service = fixture().await;
        let pages = service.find_by_tag(&tag("falafel")).await.unwrap();
        assert_eq!(pages.len(), 0);
        teardown(&service).await;
    }

    #[tokio::test]
    async fn find_by_tag_is_case_sensitive() {
        let service = fixture().await;
        assert!(service.find_by_tag(&tag("FOO")).await.unwrap().is_empty());
        teardown(&service).await;
    }
}

mod methods {
    use super::*;

    #[tokio::test]
    async fn find_similar_never_gets_itself() {
        let service = Service::new(InMemoryPageRepository::new());
        let (_, dogs, _) = seed_three(&service).await;

        let similar = service.find_similar(SimilarTo::Page(&dogs)).await.unwrap();
        assert!(similar.iter().all(|p| p.id() != dogs.id()));
        teardown(&service).await;
    }

    #[tokio::test]
    async fn find_similar_gets_other_pages_with_any_common_tags() {
        let service = Service::new(InMemoryPageRepository::new());
        let (_, dogs, cats) = seed_three(&service).await;

        let similar_to_dogs = service.find_similar(SimilarTo::Page(&dogs)).await.unwrap();
        assert_eq!(titles(&similar_to_dogs), vec!["cats"]);

        let similar_to_cats = service.find_similar(SimilarTo::Page(&cats)).await.unwrap();
        assert_eq!(titles(&similar_to_cats), vec!["dogs"]);
        teardown(&service).await;
    }

    #[tokio::test]
    async fn find_similar_does_not_get_other_pages_without_any_common_tags() {
        let service = Service::new(InMemoryPageRepository::new());
        let (foo, dogs, _) = seed_three(&service).await;

        let similar_to_dogs = service.find_similar(SimilarTo::Page(&dogs)).await.unwrap();
        assert!(similar_to_dogs.iter().all(|p| p.id() != foo.id()));

        let similar_to_foo = service.find_similar(SimilarTo::Page(&foo)).await.unwrap();
        assert!(similar_to_foo.is_empty());
        teardown(&service).await;
    }

    #[tokio::test]
    async fn find_similar_by_tag() {
        let service = Service::new(InMemoryPageRepository::new());
        seed_three(&service).await;

        let similar = service.find_similar(SimilarTo::Tag(&tag("dog"))).await.unwrap();
        assert_eq!(titles(&similar), vec!["dogs"]);

        let similar = service.find_similar(SimilarTo::Tag(&tag("animal"))).await.unwrap();
        assert_eq!(similar.len(), 2);
        teardown(&service).await;
    }

    #[tokio::test]
    async fn find_similar_by_id_loads_the_reference() {
        let service = Service::new(InMemoryPageRepository::new());
        let (_, dogs, _) = seed_three(&service).await;

        let similar = service.find_similar_by_id(dogs.id()).await.unwrap();
        assert_eq!(titles(&similar), vec!["cats"]);

        service.remove(dogs.id()).await.unwrap();
        let err = service.find_similar_by_id(dogs.id()).await.unwrap_err();
        assert!(matches!(err, PageError::NotFound(_)));
        teardown(&service).await;
    }
}

mod virtuals {
    use super::*;

    #[tokio::test]
    async fn route_returns_the_url_title_prepended_by_wiki() {
        let service = Service::new(InMemoryPageRepository::new());
        let page = service.create(draft("Foo Bar", "baz", &[])).await.unwrap();

        assert_eq!(page.route(), "/wiki/foo-bar");
        assert_eq!(page.route(), format!("/wiki/{}", page.url_title()));
    }

    #[tokio::test]
    async fn same_title_gives_same_route() {
        let service = Service::new(InMemoryPageRepository::new());
        let (a, b) = tokio::try_join!(
            service.create(draft("Same Title", "one", &[])),
            service.create(draft("Same Title", "two", &[])),
        )
        .unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.route(), b.route());
    }
}

mod hooks {
    use super::*;

    #[tokio::test]
    async fn sets_url_title_based_on_title_before_saving() {
        let service = Service::new(InMemoryPageRepository::new());
        let mut page = service.create(draft("First Title", "body", &[])).await.unwrap();
        assert_eq!(page.url_title().as_str(), "first-title");

        page.set_title("Second Title");
        assert_eq!(page.url_title().as_str(), "first-title");

        service.save(&mut page).await.unwrap();
        assert_eq!(page.url_title().as_str(), "second-title");

        let stored = service.find_by_url_title("second-title").await.unwrap().unwrap();
        assert_eq!(stored.id(), page.id());
        assert!(service.find_by_url_title("first-title").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejected_save_leaves_the_stored_page_alone() {
        let service = Service::new(InMemoryPageRepository::new());
        let mut page = service.create(draft("Title", "body", &[])).await.unwrap();

        page.set_title("");
        let err = service.save(&mut page).await.unwrap_err();
        assert!(err.validation_errors().unwrap().has(PageField::Title));

        let stored = service.get(page.id()).await.unwrap();
        assert_eq!(stored.title(), "Title");
        assert_eq!(stored.url_title().as_str(), "title");
    }
}
