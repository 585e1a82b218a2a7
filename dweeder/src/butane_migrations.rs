//! Butane migrations embedded in Rust.

use butane::migrations::MemMigrations;

/// Load the butane migrations embedded in Rust.
pub fn get_migrations() -> Result<MemMigrations, butane::Error> {
    let json = r#"{
  "migrations": {
    "20261019_093015412_init": {
      "name": "20261019_093015412_init",
      "db": {
        "tables": {
          "dweeds": {
            "name": "dweeds",
            "columns": [
              {
                "name": "id",
                "sqltype": {
                  "KnownId": {
                    "Ty": "BigInt"
                  }
                },
                "nullable": false,
                "pk": true,
                "auto": true,
                "unique": false,
                "default": null
              },
              {
                "name": "author",
                "sqltype": {
                  "KnownId": {
                    "Ty": "BigInt"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null,
                "reference": {
                  "Literal": {
                    "table_name": "users",
                    "column_name": "id"
                  }
                }
              },
              {
                "name": "body",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Text"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              },
              {
                "name": "created_at",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Timestamp"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              },
              {
                "name": "updated_at",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Timestamp"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              }
            ]
          },
          "relationships": {
            "name": "relationships",
            "columns": [
              {
                "name": "id",
                "sqltype": {
                  "KnownId": {
                    "Ty": "BigInt"
                  }
                },
                "nullable": false,
                "pk": true,
                "auto": true,
                "unique": false,
                "default": null
              },
              {
                "name": "follower",
                "sqltype": {
                  "KnownId": {
                    "Ty": "BigInt"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null,
                "reference": {
                  "Literal": {
                    "table_name": "users",
                    "column_name": "id"
                  }
                }
              },
              {
                "name": "followee",
                "sqltype": {
                  "KnownId": {
                    "Ty": "BigInt"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null,
                "reference": {
                  "Literal": {
                    "table_name": "users",
                    "column_name": "id"
                  }
                }
              }
            ]
          },
          "users": {
            "name": "users",
            "columns": [
              {
                "name": "id",
                "sqltype": {
                  "KnownId": {
                    "Ty": "BigInt"
                  }
                },
                "nullable": false,
                "pk": true,
                "auto": true,
                "unique": false,
                "default": null
              },
              {
                "name": "name",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Text"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              },
              {
                "name": "email",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Text"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": true,
                "default": null
              },
              {
                "name": "handle",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Text"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              },
              {
                "name": "handle_key",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Text"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": true,
                "default": null
              },
              {
                "name": "password_digest",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Text"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              },
              {
                "name": "remember_digest",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Text"
                  }
                },
                "nullable": true,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              },
              {
                "name": "created_at",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Timestamp"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              },
              {
                "name": "updated_at",
                "sqltype": {
                  "KnownId": {
                    "Ty": "Timestamp"
                  }
                },
                "nullable": false,
                "pk": false,
                "auto": false,
                "unique": false,
                "default": null
              }
            ]
          }
        },
        "extra_types": {}
      },
      "from": null,
      "up": {
        "pg": "CREATE TABLE dweeds (\n\"id\" BIGSERIAL NOT NULL PRIMARY KEY,\nauthor BIGINT NOT NULL,\nbody TEXT NOT NULL,\ncreated_at TIMESTAMP NOT NULL,\nupdated_at TIMESTAMP NOT NULL\n);\nCREATE TABLE relationships (\n\"id\" BIGSERIAL NOT NULL PRIMARY KEY,\nfollower BIGINT NOT NULL,\nfollowee BIGINT NOT NULL\n);\nCREATE TABLE users (\n\"id\" BIGSERIAL NOT NULL PRIMARY KEY,\n\"name\" TEXT NOT NULL,\nemail TEXT NOT NULL UNIQUE,\nhandle TEXT NOT NULL,\nhandle_key TEXT NOT NULL UNIQUE,\npassword_digest TEXT NOT NULL,\nremember_digest TEXT,\ncreated_at TIMESTAMP NOT NULL,\nupdated_at TIMESTAMP NOT NULL\n);\nALTER TABLE dweeds ADD FOREIGN KEY (author) REFERENCES users(\"id\");\nALTER TABLE relationships ADD FOREIGN KEY (follower) REFERENCES users(\"id\");\nALTER TABLE relationships ADD FOREIGN KEY (followee) REFERENCES users(\"id\");\nCREATE TABLE IF NOT EXISTS butane_migrations (\n\"name\" TEXT NOT NULL PRIMARY KEY\n);\n",
        "sqlite": "CREATE TABLE dweeds (\n\"id\" INTEGER NOT NULL PRIMARY KEY,\nauthor INTEGER NOT NULL,\nbody TEXT NOT NULL,\ncreated_at TEXT NOT NULL,\nupdated_at TEXT NOT NULL,\nFOREIGN KEY (author) REFERENCES users(\"id\")\n) STRICT;\nCREATE TABLE relationships (\n\"id\" INTEGER NOT NULL PRIMARY KEY,\nfollower INTEGER NOT NULL,\nfollowee INTEGER NOT NULL,\nFOREIGN KEY (follower) REFERENCES users(\"id\")\nFOREIGN KEY (followee) REFERENCES users(\"id\")\n) STRICT;\nCREATE TABLE users (\n\"id\" INTEGER NOT NULL PRIMARY KEY,\n\"name\" TEXT NOT NULL,\nemail TEXT NOT NULL UNIQUE,\nhandle TEXT NOT NULL,\nhandle_key TEXT NOT NULL UNIQUE,\npassword_digest TEXT NOT NULL,\nremember_digest TEXT,\ncreated_at TEXT NOT NULL,\nupdated_at TEXT NOT NULL\n) STRICT;\nCREATE TABLE IF NOT EXISTS butane_migrations (\n\"name\" TEXT NOT NULL PRIMARY KEY\n) STRICT;\n"
      },
      "down": {
        "pg": "ALTER TABLE dweeds DROP CONSTRAINT dweeds_author_fkey;\nALTER TABLE relationships DROP CONSTRAINT relationships_follower_fkey;\nALTER TABLE relationships DROP CONSTRAINT relationships_followee_fkey;\nDROP TABLE dweeds;\nDROP TABLE relationships;\nDROP TABLE users;\n",
        "sqlite": "DROP TABLE dweeds;\nDROP TABLE relationships;\nDROP TABLE users;\n"
      }
    }
  },
  "current": {
    "name": "current",
    "db": {
      "tables": {},
      "extra_types": {}
    },
    "from": null,
    "up": {},
    "down": {}
  },
  "latest": "20261019_093015412_init"
}"#;
    MemMigrations::from_json(json)
}
