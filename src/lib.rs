pub mod boot;
pub mod core;
pub mod image;
pub mod pipeline;
pub mod steps;

/*
┌────────────────────────────────────────────────────────────────────────┐
│                      FTSFORGE STRUCT ARCHITECTURE                       │
└────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── BUILD SIDE ────────────────────────────┐
│                                                                         │
│  ┌──────────────────────────────────────────────────────────────────┐  │
│  │                        struct BuildPlan                           │  │
│  │  steps: Vec<Box<dyn BuildStep>>   // explicit, declared order     │  │
│  │  validate()                       // deps must run earlier        │  │
│  │  execute()                        // sequential, fail-fast        │  │
│  └──────────────────────────────────────────────────────────────────┘  │
│                                                                         │
│  ┌───────────────────┐  ┌─────────────────────┐  ┌──────────────────┐  │
│  │ trait BuildStep   │  │ struct BuildContext │  │ struct StepId    │  │
│  │ • id()            │  │ • config            │  │ • 0: &'static str│  │
│  │ • requires()      │  │ • layout            │  └──────────────────┘  │
│  │ • run(ctx)        │  │ • manifest          │                        │
│  └───────────────────┘  │ • pinned_version    │                        │
│                         └─────────────────────┘                        │
│                                                                         │
│  BaseImageStep ──> DictionaryInstallStep ──> DictionaryLinkStep        │
│       ──> StopWordStep ──> BootstrapStep ──> manifest.verify()         │
│                                                                         │
│  ┌──────────────────────┐  ┌─────────────────────────────────────────┐ │
│  │ struct ImageLayout   │  │ struct PlacementManifest                │ │
│  │ • vendor_dict_dir    │  │ • entries: Vec<PlacementEntry>          │ │
│  │ • tsearch_dir        │  │ • record() / verify() / save() / load() │ │
│  │ • initdb_dir         │  └─────────────────────────────────────────┘ │
│  │ • extension_dir      │                                              │
│  └──────────────────────┘                                              │
└─────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── BOOT SIDE ─────────────────────────────┐
│                                                                         │
│  ┌──────────────────────────────────────────────────────────────────┐  │
│  │                        struct FirstBoot                           │  │
│  │  classify()   // Uninitialized / Initialized / Incompatible       │  │
│  │  start()      // lock, run *.sql in filename order, write marker  │  │
│  └──────────────────────────────────────────────────────────────────┘  │
│                                                                         │
│  ┌─────────────────────┐  ┌──────────────────────┐  ┌───────────────┐  │
│  │ trait ScriptExecutor│  │ struct VersionMarker │  │ DataDirLock   │  │
│  │ • execute(name,sql) │  │ • server_version     │  │ • flock(EX|NB)│  │
│  └─────────────────────┘  │ • language           │  └───────────────┘  │
│                           │ • initialized_at     │                     │
│                           └──────────────────────┘                     │
│                                                                         │
│  Uninitialized ──first start──> scripts in order ──> Initialized       │
│  Initialized   ──any start────> skip scripts, no transition            │
│  Incompatible  ──any start────> VersionIncompatible (dump/restore)     │
└─────────────────────────────────────────────────────────────────────────┘
*/
