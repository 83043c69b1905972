// src/presentation/http/constants.rs
//! Request paths, view names, layout paths and model attribute names shared
//! by the controllers.

pub mod urls {
    pub const ADD_SINGLE_ARTICLE: &str = "/manager/article/company/add/single";
    pub const ADD_SINGLE_ARTICLE_FINISH: &str = "/manager/article/company/add/single/finish";
    pub const ADD_ARTICLES_WITH_STRING: &str = "/manager/article/company/add/multiple";
    pub const ADD_ARTICLES_WITH_STRING_FINISH: &str =
        "/manager/article/company/add/multiple/finish";
    pub const SELECT_ARTICLES: &str = "/manager/article/company/select";
    pub const UPDATE_ARTICLE: &str = "/manager/article/company/update";
    pub const UPDATE_ARTICLE_FINISH: &str = "/manager/article/company/update/finish";
    pub const REMOVE_ARTICLE: &str = "/manager/article/company/remove";
    pub const REMOVE_ARTICLE_FINISH: &str = "/manager/article/company/remove/finish";

    pub const ADD_COMPANY: &str = "/manager/company/add";
    pub const ADD_COMPANY_FINISH: &str = "/manager/company/add/finish";
    pub const SELECT_COMPANIES: &str = "/manager/company/select";
    pub const REMOVE_COMPANY: &str = "/manager/company/remove";
    pub const REMOVE_COMPANY_FINISH: &str = "/manager/company/remove/finish";

    pub const SELECT_MEMBERS: &str = "/manager/member/select";

    pub const USER_COMPANY: &str = "/company";
    pub const USER_COMPANY_LOOKUP: &str = "/company/{nameOrCode}";
    pub const USER_ARTICLES: &str = "/article/company";

    pub const MEMBERSHIP: &str = "/membership";
    pub const MEMBERSHIP_FINISH: &str = "/membership/finish";
}

pub mod views {
    pub const ADD_ARTICLE_SINGLE_PROCESS: &str = "manager/add/companyArticle/singleProcessPage";
    pub const ADD_ARTICLE_MULTIPLE_PROCESS: &str =
        "manager/add/companyArticle/multipleStringProcessPage";
    pub const ADD_SINGLE_FINISH: &str = "manager/add/singleFinishPage";
    pub const ADD_MULTIPLE_FINISH: &str = "manager/add/multipleFinishPage";
    pub const ADD_COMPANY_PROCESS: &str = "manager/add/company/singleProcessPage";

    pub const SELECT_ARTICLES: &str = "manager/select/companyArticlesPage";
    pub const SELECT_COMPANIES: &str = "manager/select/companiesPage";
    pub const SELECT_MEMBERS: &str = "manager/select/membersPage";

    pub const UPDATE_ARTICLE_BEFORE_PROCESS: &str = "manager/update/companyArticle/beforeProcessPage";
    pub const UPDATE_ARTICLE_AFTER_PROCESS: &str = "manager/update/companyArticle/afterProcessPage";
    pub const UPDATE_FINISH: &str = "manager/update/finishPage";

    pub const REMOVE_PROCESS: &str = "manager/remove/processPage";
    pub const REMOVE_FINISH: &str = "manager/remove/finishPage";

    pub const USER_COMPANY_SUB: &str = "user/company/subPage";
    pub const USER_COMPANY_SHOW: &str = "user/company/showPage";
    pub const USER_ARTICLES: &str = "user/article/companyArticlesPage";

    pub const MEMBERSHIP_PROCESS: &str = "user/membership/processPage";
    pub const MEMBERSHIP_FINISH: &str = "user/membership/finishPage";
}

pub mod layouts {
    pub const BASIC: &str = "layout/basicLayout";
    pub const ADD_PROCESS: &str = "layout/manager/add/processLayout";
    pub const ADD_FINISH: &str = "layout/manager/add/finishLayout";
    pub const SELECT: &str = "layout/manager/select/layout";
    pub const UPDATE_PROCESS: &str = "layout/manager/update/processLayout";
    pub const UPDATE_FINISH: &str = "layout/manager/update/finishLayout";
    pub const REMOVE_PROCESS: &str = "layout/manager/remove/processLayout";
    pub const REMOVE_FINISH: &str = "layout/manager/remove/finishLayout";
}

pub mod attrs {
    pub const LAYOUT_PATH: &str = "layoutPath";
    pub const DATA_TYPE_KOREAN: &str = "dataTypeKorean";
    pub const DATA_TYPE_ENGLISH: &str = "dataTypeEnglish";
    pub const KEY: &str = "key";
    pub const VALUE: &str = "value";
    pub const ARTICLE: &str = "article";
    pub const ARTICLES: &str = "articles";
    pub const COMPANY: &str = "company";
    pub const COMPANIES: &str = "companies";
    pub const MEMBER: &str = "member";
    pub const MEMBERS: &str = "members";
    pub const NAME_LIST: &str = "nameList";
    pub const UPDATE_URL: &str = "updateUrl";
    pub const ERROR: &str = "error";
    pub const ERROR_SINGLE: &str = "errorSingle";
    pub const ERRORS: &str = "errors";
    pub const IS_BEAN_VALIDATION_ERROR: &str = "isBeanValidationError";
}
