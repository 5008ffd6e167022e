//! Built-in reference tables: stop words, aliases, skill vocabulary, role taxonomy.
//!
//! Everything here is lowercase. Alias canonical forms must never themselves
//! be rewritten by another alias; `Lexicon::from_source` rejects chains.

/// Words that carry no discriminating signal in a posting or resume.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "into", "through", "during", "before", "after", "above", "below", "between",
    "each", "few", "more", "most", "other", "some", "such", "than", "then", "these", "they",
    "this", "those", "very", "will", "have", "has", "had", "was", "were", "been", "be", "do",
    "does", "did", "would", "could", "should", "may", "might", "shall", "can", "our", "your",
    "their", "its", "we", "you", "he", "she", "it", "is", "are", "am", "also", "just", "only",
    "even", "so", "too", "yet", "still", "both", "either",
    // posting filler
    "experience", "years", "required", "preferred", "minimum", "strong", "knowledge",
    "ability", "skills", "team", "work", "role", "position", "candidate", "company",
    "opportunity", "environment", "including", "related", "plus", "etc", "looking", "seeking",
    "hire", "join", "help", "great", "good", "well", "high", "large", "small", "new", "must",
    "build", "drive", "define", "own", "lead", "manage", "ensure", "support", "partner",
    "develop", "across", "within", "focus", "responsible", "proven", "track", "record",
    "degree", "bachelor", "master", "phd", "certification", "equivalent", "similar",
    "relevant", "understand", "working", "collaborate", "communicate", "problem", "solution",
    "impact", "create", "maintain", "provide", "implement", "utilize", "leverage",
    "demonstrate", "about", "need", "over", "under", "what", "when", "where", "which", "while",
    "able", "here", "know", "like", "make", "much", "them", "there", "not", "all", "any",
    "being", "that", "using", "used", "use",
];

/// Alias → canonical form. Order only matters between aliases of equal length.
pub const SYNONYMS: &[(&str, &str)] = &[
    // languages
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("rb", "ruby"),
    ("c sharp", "c#"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("node js", "node.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("angularjs", "angular"),
    ("angular.js", "angular"),
    ("nextjs", "next.js"),
    ("golang", "go"),
    // cloud / devops
    ("amazon web services", "aws"),
    ("google cloud platform", "gcp"),
    ("google cloud", "gcp"),
    ("microsoft azure", "azure"),
    ("k8s", "kubernetes"),
    ("kube", "kubernetes"),
    ("k8", "kubernetes"),
    ("docker container", "docker"),
    ("ci cd", "ci/cd"),
    ("cicd", "ci/cd"),
    ("continuous integration", "ci/cd"),
    ("continuous deployment", "ci/cd"),
    ("continuous delivery", "ci/cd"),
    ("infrastructure as code", "iac"),
    ("github action", "github actions"),
    // databases
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("elastic", "elasticsearch"),
    // ai / ml
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("genai", "generative ai"),
    ("gen ai", "generative ai"),
    ("llms", "llm"),
    ("large language model", "llm"),
    ("large language models", "llm"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("hugging face", "huggingface"),
    ("hf", "huggingface"),
    // product roles
    ("pm", "product manager"),
    ("pgm", "program manager"),
    ("tpm", "technical program manager"),
    ("apm", "associate product manager"),
    ("po", "product owner"),
    ("gtm", "go-to-market"),
    ("go to market", "go-to-market"),
    ("prd", "product requirements document"),
    ("mvp", "minimum viable product"),
    ("jtbd", "jobs to be done"),
    // program / project
    ("pmo", "project management office"),
    ("pmp", "project management professional"),
    ("wbs", "work breakdown structure"),
    // metrics / business
    ("kpi", "kpis"),
    ("okr", "okrs"),
    ("nps", "net promoter score"),
    ("csat", "customer satisfaction score"),
    ("dau", "daily active users"),
    ("mau", "monthly active users"),
    ("arr", "annual recurring revenue"),
    ("mrr", "monthly recurring revenue"),
    ("ltv", "lifetime value"),
    ("cac", "customer acquisition cost"),
    ("roi", "return on investment"),
    ("saas", "software as a service"),
    ("b2b", "business-to-business"),
    ("b2c", "business-to-consumer"),
    // tools
    ("sfdc", "salesforce"),
    ("gh", "github"),
    ("gl", "gitlab"),
    // design
    ("ux", "user experience"),
    ("ui", "user interface"),
    // marketing
    ("sem", "search engine marketing"),
    ("seo", "search engine optimization"),
    ("cro", "conversion rate optimization"),
];

/// Canonical skill phrases scanned by the keyword extractor.
pub const SKILLS: &[&str] = &[
    // languages
    "python", "javascript", "typescript", "java", "go", "rust", "swift", "kotlin", "scala",
    "php", "ruby", "c++", "c#", "c", "matlab", "perl", "bash", "shell", "powershell", "sql",
    "html", "css", "sass", "r", "dart", "elixir", "haskell", "lua",
    // frontend
    "react", "angular", "vue", "next.js", "nuxt", "svelte", "redux", "mobx", "graphql",
    "webpack", "vite", "tailwind", "bootstrap", "jquery", "d3.js", "webgl", "pwa",
    "storybook", "playwright", "testing library",
    // backend
    "node.js", "express", "django", "flask", "fastapi", "spring boot", "rails", "laravel",
    "asp.net", "rest api", "restful", "grpc", "websocket", "microservices", "serverless",
    "rabbitmq", "kafka", "celery", "nginx",
    // databases
    "postgresql", "mysql", "sqlite", "mongodb", "redis", "elasticsearch", "cassandra",
    "dynamodb", "firebase", "neo4j", "bigquery", "snowflake", "redshift", "data warehouse",
    "etl", "data pipeline", "dbt", "airflow",
    // devops / cloud
    "docker", "kubernetes", "aws", "gcp", "azure", "terraform", "ansible", "jenkins", "ci/cd",
    "github actions", "circleci", "helm", "linux", "bash scripting", "cloudformation",
    "datadog", "grafana", "prometheus", "pagerduty", "observability", "site reliability", "iac",
    // ai / ml / data science
    "machine learning", "deep learning", "natural language processing", "computer vision",
    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "scipy", "keras",
    "huggingface", "llm", "generative ai", "langchain", "mlflow", "data science",
    "feature engineering", "model deployment", "mlops", "rag", "fine-tuning",
    "prompt engineering", "openai", "vertex ai", "statistical modeling", "regression",
    "classification", "clustering", "time series", "reinforcement learning",
    // analytics / bi
    "tableau", "power bi", "looker", "data studio", "excel", "analytics",
    "business intelligence", "data visualization", "dashboard", "reporting", "a/b testing",
    "mixpanel", "amplitude", "segment",
    // product management
    "product roadmap", "product strategy", "product vision", "product discovery",
    "user stories", "user research", "customer discovery", "go-to-market", "product metrics",
    "product launch", "feature prioritization", "minimum viable product",
    "product requirements document", "product-market fit", "north star metric",
    "product led growth", "product backlog", "customer interviews", "jobs to be done",
    "product positioning", "competitive analysis", "market sizing", "pricing strategy",
    "product lifecycle", "product analytics", "net promoter score",
    "customer satisfaction score", "retention metrics", "sprint planning", "release planning",
    "annual recurring revenue", "monthly recurring revenue",
    // program / project management
    "program management", "project delivery", "milestone tracking", "resource allocation",
    "risk mitigation", "program governance", "delivery management", "project timeline",
    "budget management", "project planning", "capacity planning", "dependency management",
    "waterfall", "project execution", "project portfolio", "work breakdown structure",
    "critical path", "project status report", "escalation management", "change management",
    "earned value management", "project charter", "project management office",
    "project management professional",
    // design / ux
    "user experience", "user interface", "wireframing", "prototyping", "design systems",
    "usability testing", "design thinking", "information architecture", "user flows",
    "figma", "sketch", "adobe xd", "journey mapping", "accessibility",
    // leadership / process
    "leadership", "team management", "mentoring", "stakeholder management",
    "cross-functional", "executive communication", "performance management", "agile",
    "scrum", "kanban", "lean", "tdd", "code review", "pair programming", "retrospective",
    "sprint", "backlog grooming", "velocity",
    // marketing / growth
    "search engine optimization", "search engine marketing", "digital marketing",
    "content marketing", "email marketing", "social media marketing", "demand generation",
    "brand management", "product marketing", "conversion rate optimization", "google ads",
    "facebook ads", "customer acquisition cost", "lifetime value", "marketing automation",
    "hubspot", "marketo",
    // sales / business
    "business development", "account management", "customer success",
    "pipeline management", "quota attainment", "revenue generation", "deal closing",
    "salesforce", "enterprise sales", "solution selling", "customer retention",
    // tools
    "git", "github", "gitlab", "jira", "confluence", "notion", "slack", "asana", "postman",
    "swagger", "sentry",
    // domains
    "fintech", "healthtech", "edtech", "saas", "b2b", "b2c", "e-commerce", "mobile", "ios",
    "android", "blockchain", "cybersecurity", "cloud computing", "distributed systems",
    "system design", "api design", "platform engineering",
];

/// One taxonomy row: role identifier, canonical titles, distinctive phrases.
pub type RoleRow = (&'static str, &'static [&'static str], &'static [&'static str]);

/// Role taxonomy. Row order is the tie-break order of role detection.
pub const ROLES: &[RoleRow] = &[
    (
        "product_manager",
        &[
            "product manager", "product owner", "head of product", "director of product",
            "vp of product", "vp product", "chief product officer", "cpo",
            "group product manager", "senior product manager", "associate product manager",
            "apm", "product lead", "product management lead",
        ],
        &[
            "product roadmap", "product strategy", "product vision", "product discovery",
            "user stories", "user research", "customer discovery", "go-to-market",
            "gtm strategy", "product metrics", "product launch", "feature prioritization",
            "product requirements", "prd", "mvp", "minimum viable product",
            "product-market fit", "north star metric", "product led growth", "plg",
            "product backlog", "product thinking", "product sense", "customer interviews",
            "customer feedback", "product adoption", "product analytics", "activation rate",
            "churn rate", "nps", "csat", "product positioning", "competitive analysis",
            "market sizing", "pricing strategy", "product lifecycle", "product operations",
            "growth metrics", "retention metrics", "user acquisition", "product brief",
            "jobs to be done", "jtbd", "product specification", "acceptance criteria",
            "feature roadmap", "release roadmap", "beta testing", "product opportunity",
            "market opportunity", "value proposition",
        ],
    ),
    (
        "program_manager",
        &[
            "program manager", "technical program manager", "tpm", "project manager",
            "delivery manager", "portfolio manager", "pmo director", "program lead",
            "program management office", "pmo", "project management professional", "pmp",
            "project delivery manager", "it project manager", "engineering program manager",
            "senior program manager", "associate program manager", "program coordinator",
        ],
        &[
            "program management", "project delivery", "milestone tracking",
            "resource allocation", "risk mitigation", "program governance",
            "delivery management", "project timeline", "budget management",
            "project planning", "capacity planning", "dependency management",
            "waterfall methodology", "project execution", "project portfolio",
            "program roadmap", "project status report", "escalation management", "issue log",
            "project risk register", "executive reporting", "steering committee",
            "project charter", "project scope", "change management", "program delivery",
            "work breakdown structure", "wbs", "critical path", "resource leveling",
            "earned value management", "project kickoff", "lessons learned",
            "project closure", "schedule management", "cost baseline", "project governance",
            "program oversight", "intake process", "cross-functional delivery",
            "delivery cadence", "operational excellence",
        ],
    ),
    (
        "software_engineer",
        &[
            "software engineer", "software developer", "swe", "backend engineer",
            "frontend engineer", "full stack engineer", "fullstack engineer",
            "full-stack engineer", "staff engineer", "principal engineer", "senior engineer",
            "junior engineer", "web developer", "application developer", "systems engineer",
            "platform engineer",
        ],
        &[
            "software development", "system design", "code review", "api design",
            "software architecture", "technical design", "object oriented programming",
            "functional programming", "design patterns", "refactoring", "technical debt",
            "scalability", "performance optimization", "debugging", "unit tests",
            "test driven development", "build pipelines", "distributed systems",
            "low latency", "high throughput", "fault tolerant", "production systems",
            "microservice architecture", "monolith", "service oriented architecture",
        ],
    ),
    (
        "data_scientist",
        &[
            "data scientist", "ml engineer", "machine learning engineer", "ai engineer",
            "research scientist", "applied scientist", "quantitative researcher",
            "statistician", "ai researcher", "nlp engineer", "computer vision engineer",
        ],
        &[
            "machine learning", "deep learning", "statistical modeling",
            "predictive modeling", "feature engineering", "model training",
            "model deployment", "neural networks", "natural language processing",
            "computer vision", "reinforcement learning", "hypothesis testing",
            "regression analysis", "classification model", "clustering", "random forest",
            "gradient boosting", "transformer models", "model evaluation", "model accuracy",
            "precision recall", "roc auc", "experiment design", "causal inference",
            "bayesian inference",
        ],
    ),
    (
        "data_analyst",
        &[
            "data analyst", "business analyst", "analytics engineer", "bi analyst",
            "business intelligence analyst", "reporting analyst", "marketing analyst",
            "financial analyst", "operations analyst", "strategy analyst", "insights analyst",
        ],
        &[
            "data analysis", "business intelligence", "data visualization",
            "dashboard creation", "sql queries", "data insights", "kpi tracking",
            "business reporting", "metrics analysis", "ad hoc analysis", "data storytelling",
            "pivot tables", "looker", "tableau", "power bi", "data studio",
            "statistical analysis", "trend analysis", "variance analysis",
            "root cause analysis", "business metrics",
        ],
    ),
    (
        "designer",
        &[
            "ux designer", "ui designer", "product designer", "interaction designer",
            "visual designer", "design lead", "ux researcher", "design director",
            "brand designer", "graphic designer", "motion designer", "experience designer",
        ],
        &[
            "user experience", "wireframing", "prototyping", "design systems",
            "usability testing", "design thinking", "information architecture", "user flows",
            "design sprint", "visual design", "interaction design", "accessibility design",
            "figma", "sketch", "adobe xd", "user personas", "journey mapping",
            "heuristic evaluation", "design critique", "design handoff",
        ],
    ),
    (
        "devops",
        &[
            "devops engineer", "site reliability engineer", "sre", "platform engineer",
            "cloud engineer", "infrastructure engineer", "devsecops", "cloud architect",
            "systems administrator", "network engineer", "reliability engineer",
        ],
        &[
            "continuous integration", "continuous deployment", "infrastructure as code",
            "container orchestration", "cloud infrastructure", "monitoring", "observability",
            "incident management", "on-call rotation", "terraform", "ansible",
            "helm charts", "service mesh", "load balancing", "disaster recovery",
            "availability", "reliability", "latency slo", "error budget", "runbook",
        ],
    ),
    (
        "marketing",
        &[
            "marketing manager", "growth manager", "demand generation", "brand manager",
            "content manager", "digital marketing manager", "marketing director",
            "performance marketing", "product marketing manager", "pmm", "field marketing",
            "marketing lead", "vp marketing", "chief marketing officer", "cmo",
        ],
        &[
            "marketing strategy", "brand awareness", "lead generation", "demand generation",
            "content marketing", "email marketing", "social media", "paid advertising", "sem",
            "google ads", "facebook ads", "conversion rate optimization",
            "marketing qualified lead", "mql", "sales qualified lead", "sql pipeline",
            "campaign management", "marketing automation", "hubspot", "marketo",
            "customer acquisition cost", "cac", "lifetime value", "ltv", "attribution model",
            "brand positioning", "messaging framework", "go to market execution",
        ],
    ),
    (
        "sales",
        &[
            "account executive", "sales manager", "sales director", "business development",
            "sales representative", "account manager", "customer success manager",
            "revenue manager", "vp sales", "chief revenue officer", "cro", "inside sales",
            "enterprise sales", "solution engineer", "sales engineer",
        ],
        &[
            "quota attainment", "pipeline management", "revenue generation", "deal closing",
            "outbound prospecting", "account management", "customer retention", "upselling",
            "cross-selling", "sales cycle", "enterprise sales", "smb sales",
            "solution selling", "consultative selling", "annual recurring revenue", "arr",
            "monthly recurring revenue", "mrr", "net revenue retention", "nrr",
            "sales playbook", "discovery call", "proof of concept", "procurement", "rfp",
        ],
    ),
];
